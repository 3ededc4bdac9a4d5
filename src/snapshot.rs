use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use url::Url;

use crate::api::models::{
    ContactInfo, HeadingCounts, PageContent, PageHeading, PageImage, PageLink, PageMetadata,
    PagePerformance, PageSnapshot, PageStats, PageTable,
};

/// Hostname used when the requested URL cannot be parsed. The endpoint does
/// not reject malformed URLs, it still answers with a snapshot for this
/// placeholder domain.
const FALLBACK_DOMAIN: &str = "example.com";

// Fixture table shared by every snapshot, built once
static PRODUCT_TABLE: Lazy<PageTable> = Lazy::new(|| PageTable {
    headers: vec!["Product".to_string(), "Price".to_string(), "Availability".to_string()],
    rows: vec![
        vec!["Product A".to_string(), "$19.99".to_string(), "In Stock".to_string()],
        vec!["Product B".to_string(), "$24.99".to_string(), "Out of Stock".to_string()],
        vec!["Product C".to_string(), "$15.99".to_string(), "In Stock".to_string()],
    ],
});

/// Builds the simulated scrape result for a URL.
///
/// Everything except the timestamp is derived from the URL's hostname, so
/// repeated calls for the same page produce structurally identical payloads.
pub fn build(url: &str, use_selenium: bool) -> PageSnapshot {
    let now = Utc::now();
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let domain = domain_of(url);
    let method = if use_selenium { "Selenium WebDriver" } else { "Standard HTTP" };

    PageSnapshot {
        success: true,
        url: url.to_string(),
        timestamp,
        method: method.to_string(),
        metadata: Some(PageMetadata {
            title: format!("{} - Homepage", capitalize(&domain)),
            description: format!("This is a meta description from {domain}"),
            language: "en-US".to_string(),
            last_updated: now.format("%Y-%m-%d").to_string(),
        }),
        stats: Some(PageStats {
            headings: HeadingCounts { h1: 2, h2: 8, h3: 15 },
            paragraphs: 24,
            links: 38,
            images: 12,
            tables: 3,
            forms: 2,
        }),
        content: Some(PageContent {
            headings: vec![
                PageHeading { level: "h1".to_string(), text: format!("Welcome to {domain}") },
                PageHeading { level: "h2".to_string(), text: "Our Products".to_string() },
                PageHeading { level: "h2".to_string(), text: "About Us".to_string() },
                PageHeading { level: "h2".to_string(), text: "Contact Information".to_string() },
            ],
            main_text: format!(
                "This is example text content from {domain}. It would contain much more information in a real scrape."
            ),
            links: vec![
                PageLink { text: "Home".to_string(), url: "#home".to_string() },
                PageLink { text: "Products".to_string(), url: "#products".to_string() },
                PageLink { text: "About".to_string(), url: "#about".to_string() },
                PageLink { text: "Contact".to_string(), url: "#contact".to_string() },
            ],
            images: vec![
                PageImage { alt: "Logo".to_string(), src: "/images/logo.png".to_string() },
                PageImage { alt: "Product Image".to_string(), src: "/images/product.jpg".to_string() },
            ],
            tables: vec![PRODUCT_TABLE.clone()],
            contact_info: Some(ContactInfo {
                email: format!("info@{domain}"),
                phone: "+1 (555) 123-4567".to_string(),
                address: "123 Main Street, Anytown, USA".to_string(),
            }),
        }),
        performance: Some(PagePerformance {
            load_time: "1.2s".to_string(),
            resource_count: 45,
            javascript_files: 12,
            css_files: 5,
        }),
    }
}

fn domain_of(raw: &str) -> String {
    Url::parse(raw)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| FALLBACK_DOMAIN.to_string())
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
