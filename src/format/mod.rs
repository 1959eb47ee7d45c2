//! Output formatting for listings and product details (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::store::{ListingPage, ProductDetail};

/// Formats store records for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a browse page.
    pub fn format_listing(&self, page: &ListingPage) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_listing(page),
            OutputFormat::Markdown => self.markdown_listing(page),
            OutputFormat::Csv => self.csv_listing(page),
        }
    }

    /// Formats a single product detail.
    pub fn format_detail(&self, detail: &ProductDetail) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(detail).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_detail(detail),
            OutputFormat::Markdown => self.markdown_detail(detail),
            OutputFormat::Csv => self.csv_details(std::slice::from_ref(detail)),
        }
    }

    /// Formats several product details.
    pub fn format_details(&self, details: &[ProductDetail]) -> String {
        if details.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_detail_header(),
                _ => "No games found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(details).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Csv => self.csv_details(details),
            OutputFormat::Table => {
                details.iter().map(|d| self.table_detail(d)).collect::<Vec<_>>().join("\n\n")
            }
            OutputFormat::Markdown => {
                details.iter().map(|d| self.markdown_detail(d)).collect::<Vec<_>>().join("\n\n")
            }
        }
    }

    // Table formatting

    fn table_listing(&self, page: &ListingPage) -> String {
        let id_width = 12;
        let title_width = 50;

        let mut lines = Vec::new();

        lines.push(format!("{:<id_width$}  {}", "ID", "Title"));
        lines.push(format!("{:-<id_width$}  {:-<title_width$}", "", ""));

        for entry in &page.entries {
            lines.push(format!("{:<id_width$}  {}", entry.id, truncate(&entry.title, title_width)));
        }

        if page.is_empty() {
            lines.push("No games found.".to_string());
        }

        lines.push(String::new());
        lines.push(format!(
            "Page {} of {} ({} games)",
            page.current_page,
            page.last_page,
            page.count()
        ));

        lines.join("\n")
    }

    fn table_detail(&self, detail: &ProductDetail) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Title:     {}", or_na(&detail.title)));
        lines.push(format!("Platforms: {}", or_na(&detail.platforms)));
        lines.push(format!("Released:  {}", or_na(&detail.release_date)));
        lines.push(format!("Publisher: {}", or_na(&detail.publisher)));
        if !detail.genres.is_empty() {
            lines.push(format!("Genres:    {}", detail.genres));
        }

        if detail.editions.is_empty() {
            lines.push("Editions:  N/A".to_string());
        } else {
            lines.push("Editions:".to_string());
            for edition in &detail.editions {
                let price = if edition.is_discounted() {
                    format!("{} (was {})", edition.discount_price, edition.original_price)
                } else {
                    edition.original_price.clone()
                };
                lines.push(format!("  - {}: {} {}", edition.title, price, edition.currency));
            }
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_listing(&self, page: &ListingPage) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Title |".to_string());
        lines.push("|----|-------|".to_string());

        for entry in &page.entries {
            lines.push(format!(
                "| {} | [{}]({}) |",
                entry.id,
                truncate(&entry.title, 40),
                entry.page_url
            ));
        }

        lines.push(String::new());
        lines.push(format!("*Page {} of {}*", page.current_page, page.last_page));

        lines.join("\n")
    }

    fn markdown_detail(&self, detail: &ProductDetail) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", detail.title.as_deref().unwrap_or("Untitled")));
        lines.push(String::new());

        if let Some(platforms) = &detail.platforms {
            lines.push(format!("- **Platforms:** {}", platforms));
        }
        if let Some(release_date) = &detail.release_date {
            lines.push(format!("- **Released:** {}", release_date));
        }
        if let Some(publisher) = &detail.publisher {
            lines.push(format!("- **Publisher:** {}", publisher));
        }
        if !detail.genres.is_empty() {
            lines.push(format!("- **Genres:** {}", detail.genres));
        }

        for edition in &detail.editions {
            if edition.is_discounted() {
                lines.push(format!(
                    "- **{}:** {} ~~{}~~ {}",
                    edition.title, edition.discount_price, edition.original_price, edition.currency
                ));
            } else {
                lines.push(format!(
                    "- **{}:** {} {}",
                    edition.title, edition.original_price, edition.currency
                ));
            }
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv_listing(&self, page: &ListingPage) -> String {
        let mut lines = vec!["id,title,image_url,page_url".to_string()];

        for entry in &page.entries {
            lines.push(format!(
                "{},{},{},{}",
                Self::csv_escape(&entry.id),
                Self::csv_escape(&entry.title),
                Self::csv_escape(&entry.image_url),
                Self::csv_escape(&entry.page_url)
            ));
        }

        lines.join("\n")
    }

    fn csv_detail_header(&self) -> String {
        "title,platforms,release_date,publisher,genres,edition,original_price,discount_price,currency"
            .to_string()
    }

    /// One row per edition; a detail without editions still yields one row.
    fn csv_details(&self, details: &[ProductDetail]) -> String {
        let mut lines = vec![self.csv_detail_header()];

        for detail in details {
            let head = [
                detail.title.as_deref().unwrap_or_default(),
                detail.platforms.as_deref().unwrap_or_default(),
                detail.release_date.as_deref().unwrap_or_default(),
                detail.publisher.as_deref().unwrap_or_default(),
                detail.genres.as_str(),
            ]
            .iter()
            .map(|s| Self::csv_escape(s))
            .collect::<Vec<_>>()
            .join(",");

            if detail.editions.is_empty() {
                lines.push(format!("{},,,,", head));
                continue;
            }

            for edition in &detail.editions {
                lines.push(format!(
                    "{},{},{},{},{}",
                    head,
                    Self::csv_escape(&edition.title),
                    Self::csv_escape(&edition.original_price),
                    Self::csv_escape(&edition.discount_price),
                    Self::csv_escape(&edition.currency)
                ));
            }
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// Truncates on character boundaries so non-ASCII titles stay valid.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}
