//! README listing generated from the catalog.
//!
//! Categories appear in `order` sequence and only when they hold at least one
//! tool; tools inside a category are sorted by name ignoring case. The
//! surrounding prose is fixed text.

use crate::catalog::{Catalog, Tool};
use chrono::{DateTime, Utc};
use std::fmt::Write;

const HEADER: &str = "# Awesome In-Browser Security Tools

[![Awesome](https://awesome.re/badge.svg)](https://awesome.re)

> A curated list of open-source information security tools that run entirely in your browser — no backend, no installation required.

## Philosophy

These tools embrace a client-side-first approach to security tooling:

- **Data Privacy** — No user data storage on servers
- **No Persistent API Keys** — Keys input as needed, never stored
- **No CORS Proxying** — Prevents third-party data interception
- **Client-Side Operations** — All processing happens in your browser
- **Transparent Hosting** — Open-source code hosted on GitHub Pages

Read more: [Making Security Tools Accessible: Why I Chose the Browser](https://blog.anantshri.info/making-security-tools-accessible-why-i-chose-the-browser/)

---

## Contents

";

const FOOTER: &str = "## Contributing

Contributions are welcome! To add a new tool:

1. Fork this repository
2. Edit `data/tools.json` — add your tool entry
3. Submit a pull request

That's it! Our automation will validate your entry and update the README and website automatically.

See [CONTRIBUTING.md](CONTRIBUTING.md) for the tool entry format and criteria.

---

## License

[![CC0](https://licensebuttons.net/p/zero/1.0/88x31.png)](https://creativecommons.org/publicdomain/zero/1.0/)

To the extent possible under law, the contributors have waived all copyright and related or neighboring rights to this work.

---

";

/// Render the full README for `catalog`, stamped with `generated_at`.
pub fn render_readme(catalog: &Catalog, generated_at: DateTime<Utc>) -> String {
    let grouped = catalog.tools_by_category();
    let sections: Vec<_> = catalog
        .sorted_categories()
        .into_iter()
        .filter_map(|(id, category)| {
            grouped
                .get(id.as_str())
                .map(|tools| (category.name.as_str(), tools))
        })
        .collect();

    let mut out = String::from(HEADER);

    for (name, _) in &sections {
        let _ = writeln!(out, "- [{name}](#{})", heading_anchor(name));
    }
    out.push_str("- [Contributing](#contributing)\n\n---\n\n");

    let rendered: Vec<String> = sections
        .iter()
        .map(|(name, tools)| {
            let mut section = format!("## {name}\n\n");
            for tool in tools.iter() {
                section.push_str(&render_tool_entry(tool));
            }
            section
        })
        .collect();
    out.push_str(&rendered.join("\n"));
    out.push('\n');

    out.push_str(FOOTER);
    let _ = writeln!(
        out,
        "<sub>Last generated: {}</sub>",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    out
}

/// Anchor GitHub assigns to a `##` heading with this text.
pub fn heading_anchor(name: &str) -> String {
    name.to_lowercase().replace(" & ", "--").replace(' ', "-")
}

/// Markdown block for one tool: heading, description, property table.
pub fn render_tool_entry(tool: &Tool) -> String {
    let keywords = tool
        .keywords
        .iter()
        .map(|kw| format!("`{kw}`"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut entry = String::new();
    let _ = write!(
        entry,
        "### {name}\n\n{description}\n\n\
         | Property | Value |\n\
         |----------|-------|\n\
         | **Author** | {author} |\n\
         | **Demo** | [{demo_text}]({demo}) |\n\
         | **Repository** | [{repo_text}]({repo}) |\n\
         | **Keywords** | {keywords} |",
        name = tool.name,
        description = tool.description,
        author = tool.author,
        demo_text = tool.demo.replace("https://", ""),
        demo = tool.demo,
        repo_text = tool.repo.replace("https://", ""),
        repo = tool.repo,
    );

    match tool.github_repo_path() {
        Some(path) => {
            let _ = write!(
                entry,
                "\n| **License** | ![License](https://badgen.net/github/license/{path}) |\
                 \n| **Last Update** | ![Last Commit](https://badgen.net/github/last-commit/{path}) |"
            );
        }
        None => {
            let license = tool.license.as_deref().unwrap_or("Unknown");
            let _ = write!(entry, "\n| **License** | {license} |");
        }
    }

    let sponsors = tool
        .donations
        .links()
        .iter()
        .map(|link| format!("[{}]({})", link.label, link.url))
        .collect::<Vec<_>>();
    if !sponsors.is_empty() {
        let _ = write!(entry, "\n| **Sponsor** | {} |", sponsors.join(" · "));
    }

    entry.push_str("\n\n---\n");
    entry
}
