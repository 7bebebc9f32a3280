use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

/// One titled block of report content: prose and/or plots, in order.
pub struct ReportSection {
    title: String,
    blocks: Vec<Markup>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        ReportSection {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(content);
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(PreEscaped(plot.to_inline_html(None)));
    }

    fn render(&self) -> Markup {
        html! {
            section {
                h2 { (self.title) }
                @for block in &self.blocks {
                    div { (block.clone()) }
                }
            }
        }
    }
}

/// A standalone HTML report assembled from sections.
pub struct Report {
    title: String,
    subtitle: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Report {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn render(&self) -> Markup {
        let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    style {
                        "body { font-family: sans-serif; margin: 2rem auto; max-width: 60rem; }"
                        "h1 { border-bottom: 1px solid #ccc; padding-bottom: 0.3rem; }"
                        ".meta { color: #666; font-size: 0.9rem; }"
                        "pre { background: #f5f5f5; padding: 0.6rem; }"
                    }
                }
                body {
                    h1 { (self.title) }
                    p { (self.subtitle) }
                    p class="meta" { "Generated " (generated) }
                    @for section in &self.sections {
                        (section.render())
                    }
                }
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let rendered = self.render().into_string();
        fs::write(&path, rendered)
            .with_context(|| format!("Failed to write report to {}", path.as_ref().display()))?;
        Ok(())
    }
}
