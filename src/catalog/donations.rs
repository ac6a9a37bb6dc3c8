//! The `donations` field of a tool entry.
//!
//! Older entries carry a single sponsor URL; newer ones carry an object keyed
//! by platform. Both decode into [`Donations`], with absence and `null`
//! decoding to [`Donations::None`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Donations {
    #[default]
    None,
    /// Legacy form: one URL string.
    Link(String),
    /// Per-platform sponsor links.
    Platforms(DonationPlatforms),
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct DonationPlatforms {
    #[serde(default, deserialize_with = "string_or_none")]
    pub github_sponsors: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub buy_me_a_coffee: Option<String>,
}

/// Platform entries that are not strings carry no usable link.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(url) => Some(url),
        _ => None,
    })
}

/// A labelled sponsor link ready for display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SponsorLink<'a> {
    pub label: &'static str,
    pub url: &'a str,
}

impl Donations {
    /// Sponsor links in display order. Empty URLs are skipped.
    pub fn links(&self) -> Vec<SponsorLink<'_>> {
        match self {
            Donations::None => Vec::new(),
            Donations::Link(url) if url.is_empty() => Vec::new(),
            Donations::Link(url) => vec![SponsorLink {
                label: "Support the author",
                url: url.as_str(),
            }],
            Donations::Platforms(platforms) => [
                ("GitHub Sponsors", platforms.github_sponsors.as_deref()),
                ("Buy Me a Coffee", platforms.buy_me_a_coffee.as_deref()),
            ]
            .into_iter()
            .filter_map(|(label, url)| match url {
                Some(url) if !url.is_empty() => Some(SponsorLink { label, url }),
                _ => None,
            })
            .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DonationsRepr {
    Link(String),
    Platforms(DonationPlatforms),
}

impl<'de> Deserialize<'de> for Donations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<DonationsRepr>::deserialize(deserializer)? {
            None => Donations::None,
            Some(DonationsRepr::Link(url)) => Donations::Link(url),
            Some(DonationsRepr::Platforms(platforms)) => Donations::Platforms(platforms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_all_three_forms() {
        let none: Donations = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(none, Donations::None);

        let link: Donations = serde_json::from_value(json!("https://ko-fi.com/a")).unwrap();
        assert_eq!(link, Donations::Link("https://ko-fi.com/a".to_string()));

        let platforms: Donations =
            serde_json::from_value(json!({"buy_me_a_coffee": "https://buymeacoffee.com/a"}))
                .unwrap();
        assert_eq!(
            platforms,
            Donations::Platforms(DonationPlatforms {
                github_sponsors: None,
                buy_me_a_coffee: Some("https://buymeacoffee.com/a".to_string()),
            })
        );
    }

    #[test]
    fn non_string_platform_links_are_dropped() {
        let donations: Donations = serde_json::from_value(json!({
            "github_sponsors": 5,
            "buy_me_a_coffee": "https://buymeacoffee.com/a"
        }))
        .unwrap();
        assert_eq!(
            donations,
            Donations::Platforms(DonationPlatforms {
                github_sponsors: None,
                buy_me_a_coffee: Some("https://buymeacoffee.com/a".to_string()),
            })
        );
        let labels: Vec<_> = donations.links().iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Buy Me a Coffee"]);

        let only_bad: Donations =
            serde_json::from_value(json!({"github_sponsors": {"url": "x"}})).unwrap();
        assert!(only_bad.links().is_empty());
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_value::<Donations>(json!([1])).is_err());
        assert!(serde_json::from_value::<Donations>(json!(3)).is_err());
    }

    #[test]
    fn links_follow_platform_order_and_skip_empty() {
        let both = Donations::Platforms(DonationPlatforms {
            github_sponsors: Some("https://github.com/sponsors/a".to_string()),
            buy_me_a_coffee: Some("https://buymeacoffee.com/a".to_string()),
        });
        let labels: Vec<_> = both.links().iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["GitHub Sponsors", "Buy Me a Coffee"]);

        assert!(Donations::Link(String::new()).links().is_empty());
        assert!(Donations::Platforms(DonationPlatforms::default()).links().is_empty());
        assert!(Donations::None.links().is_empty());
    }
}
