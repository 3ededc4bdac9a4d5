use std::fmt::Write as _;

use chrono::{SecondsFormat, Utc};

use crate::api::models::{PageSnapshot, PageTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Products,
    Contact,
    Images,
    Headings,
    Performance,
    FullReport,
    General,
}

/// Ordered keyword groups. The first group with any substring match in the
/// lowercased query wins, so "price of contact plans" reports products.
const TOPIC_KEYWORDS: &[(&[&str], Topic)] = &[
    (&["product", "price"], Topic::Products),
    (&["contact", "email", "phone"], Topic::Contact),
    (&["image", "picture", "photo"], Topic::Images),
    (&["header", "heading", "title"], Topic::Headings),
    (&["performance", "speed", "load"], Topic::Performance),
    (&["all"], Topic::FullReport),
];

fn classify(query: &str) -> Topic {
    let query = query.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| query.contains(keyword)))
        .map(|(_, topic)| *topic)
        .unwrap_or(Topic::General)
}

/// Renders the canned extraction answer for a query against a snapshot.
///
/// Missing snapshot sections degrade to empty or fallback renderings, never
/// to an error, since the snapshot arrives from the client.
pub fn extract_content(snapshot: &PageSnapshot, query: &str) -> String {
    let mut out = format!("EXTRACTION RESULTS FOR: \"{}\"\n\n", query);

    match classify(query) {
        Topic::Products => products_section(&mut out, snapshot),
        Topic::Contact => contact_section(&mut out, snapshot),
        Topic::Images => images_section(&mut out, snapshot),
        Topic::Headings => headings_section(&mut out, snapshot),
        Topic::Performance => performance_section(&mut out, snapshot),
        Topic::FullReport => full_report_section(&mut out, snapshot),
        Topic::General => general_section(&mut out, snapshot),
    }

    out.push_str("\n-----\n");
    out.push_str("Note: This extraction was performed by an automated system using AI processing.\n");
    let _ = write!(
        out,
        "Timestamp: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    );
    out
}

fn first_table(snapshot: &PageSnapshot) -> Option<&PageTable> {
    snapshot.content.as_ref().and_then(|content| content.tables.first())
}

fn push_product_rows(out: &mut String, table: &PageTable) {
    for row in &table.rows {
        let name = row.first().map(String::as_str).unwrap_or_default();
        let price = row.get(1).map(String::as_str).unwrap_or_default();
        let availability = row.get(2).map(String::as_str).unwrap_or_default();
        let _ = writeln!(out, "- {}: {} ({})", name, price, availability);
    }
}

fn products_section(out: &mut String, snapshot: &PageSnapshot) {
    out.push_str("PRODUCTS INFORMATION:\n\n");
    if let Some(table) = first_table(snapshot) {
        out.push_str("Product List:\n");
        push_product_rows(out, table);
    }
}

fn contact_section(out: &mut String, snapshot: &PageSnapshot) {
    out.push_str("CONTACT INFORMATION:\n\n");
    match snapshot.content.as_ref().and_then(|content| content.contact_info.as_ref()) {
        Some(contact) => {
            out.push_str("The following contact information was found:\n");
            let _ = writeln!(out, "- Email: {}", contact.email);
            let _ = writeln!(out, "- Phone: {}", contact.phone);
            let _ = write!(out, "- Address: {}\n\n", contact.address);
        }
        None => {
            out.push_str("Based on the webpage content, the following contact information was found:\n");
            out.push_str("- Website has a Contact section but no specific contact details were identified\n");
            out.push_str("- A contact link was found: Contact (#contact)\n");
        }
    }
}

fn images_section(out: &mut String, snapshot: &PageSnapshot) {
    out.push_str("IMAGE INFORMATION:\n\n");
    out.push_str("The following images were found on the webpage:\n");
    if let Some(content) = snapshot.content.as_ref() {
        for (index, image) in content.images.iter().enumerate() {
            let alt = if image.alt.is_empty() { "Unnamed image" } else { image.alt.as_str() };
            let _ = writeln!(out, "{}. {}: {}", index + 1, alt, image.src);
        }
    }
}

fn headings_section(out: &mut String, snapshot: &PageSnapshot) {
    out.push_str("HEADING INFORMATION:\n\n");
    if let Some(content) = snapshot.content.as_ref() {
        out.push_str("Main headings found on the page:\n");
        for (index, heading) in content.headings.iter().enumerate() {
            let _ = writeln!(out, "{}. {}: {}", index + 1, heading.level, heading.text);
        }
    }
}

fn performance_section(out: &mut String, snapshot: &PageSnapshot) {
    out.push_str("PERFORMANCE INFORMATION:\n\n");
    if let Some(performance) = snapshot.performance.as_ref() {
        out.push_str("Website performance metrics:\n");
        let _ = writeln!(out, "- Load Time: {}", performance.load_time);
        let _ = writeln!(out, "- Resource Count: {}", performance.resource_count);
        let _ = writeln!(out, "- JavaScript Files: {}", performance.javascript_files);
        let _ = writeln!(out, "- CSS Files: {}", performance.css_files);
    }
}

fn full_report_section(out: &mut String, snapshot: &PageSnapshot) {
    out.push_str("COMPREHENSIVE WEBSITE INFORMATION:\n\n");

    let metadata = snapshot.metadata.clone().unwrap_or_default();
    let _ = writeln!(out, "URL: {}", snapshot.url);
    let _ = writeln!(out, "Title: {}", metadata.title);
    let _ = write!(out, "Description: {}\n\n", metadata.description);

    let stats = snapshot.stats.clone().unwrap_or_default();
    out.push_str("Content Statistics:\n");
    let total_headings = stats.headings.h1 + stats.headings.h2 + stats.headings.h3;
    let _ = writeln!(out, "- Headings: {} total", total_headings);
    let _ = writeln!(out, "- Paragraphs: {}", stats.paragraphs);
    let _ = writeln!(out, "- Links: {}", stats.links);
    let _ = write!(out, "- Images: {}\n\n", stats.images);

    if let Some(contact) = snapshot.content.as_ref().and_then(|content| content.contact_info.as_ref()) {
        out.push_str("Contact Information:\n");
        let _ = writeln!(out, "- Email: {}", contact.email);
        let _ = writeln!(out, "- Phone: {}", contact.phone);
        let _ = write!(out, "- Address: {}\n\n", contact.address);
    }

    if let Some(table) = first_table(snapshot) {
        out.push_str("Product Information:\n");
        push_product_rows(out, table);
    }
}

fn general_section(out: &mut String, snapshot: &PageSnapshot) {
    out.push_str("GENERAL INFORMATION:\n\n");

    let title = snapshot.metadata.as_ref().map(|m| m.title.as_str()).unwrap_or("Unknown");
    let description = snapshot
        .metadata
        .as_ref()
        .map(|m| m.description.as_str())
        .unwrap_or("Not available");
    let _ = writeln!(out, "Page Title: {}", title);
    let _ = write!(out, "Description: {}\n\n", description);

    let stats = snapshot.stats.clone().unwrap_or_default();
    out.push_str("Content Summary:\n");
    let _ = writeln!(
        out,
        "- The page contains {} main headings and {} subheadings",
        stats.headings.h1, stats.headings.h2
    );
    let _ = writeln!(out, "- There are {} paragraphs of text", stats.paragraphs);
    let _ = writeln!(out, "- The page has {} links and {} images", stats.links, stats.images);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot;

    fn demo_snapshot() -> PageSnapshot {
        snapshot::build("https://example.com", true)
    }

    #[test]
    fn classification_is_case_insensitive_and_ordered() {
        assert_eq!(classify("What is the PRICE?"), Topic::Products);
        // "price" is tested before "contact", so a query with both reports products
        assert_eq!(classify("price of contact plans"), Topic::Products);
        assert_eq!(classify("CONTACT details please"), Topic::Contact);
        assert_eq!(classify("show me a picture"), Topic::Images);
        assert_eq!(classify("page title"), Topic::Headings);
        assert_eq!(classify("how fast does it load"), Topic::Performance);
        assert_eq!(classify("give me all of it"), Topic::FullReport);
        assert_eq!(classify("anything else"), Topic::General);
    }

    #[test]
    fn products_lists_every_table_row() {
        let result = extract_content(&demo_snapshot(), "product prices");
        assert!(result.contains("PRODUCTS INFORMATION:"));
        assert!(result.contains("- Product A: $19.99 (In Stock)"));
        assert!(result.contains("- Product B: $24.99 (Out of Stock)"));
        assert!(result.contains("- Product C: $15.99 (In Stock)"));
    }

    #[test]
    fn contact_renders_email_phone_address() {
        let result = extract_content(&demo_snapshot(), "contact info");
        assert!(result.contains("CONTACT INFORMATION"));
        assert!(result.contains("- Email: info@example.com"));
        assert!(result.contains("- Phone: +1 (555) 123-4567"));
        assert!(result.contains("- Address: 123 Main Street, Anytown, USA"));
    }

    #[test]
    fn contact_falls_back_without_contact_info() {
        let bare = PageSnapshot::default();
        let result = extract_content(&bare, "email address?");
        assert!(result.contains("no specific contact details were identified"));
        assert!(result.contains("Contact (#contact)"));
    }

    #[test]
    fn images_are_numbered_with_alt_fallback() {
        let mut snapshot = demo_snapshot();
        if let Some(content) = snapshot.content.as_mut() {
            content.images[1].alt.clear();
        }
        let result = extract_content(&snapshot, "any photos?");
        assert!(result.contains("1. Logo: /images/logo.png"));
        assert!(result.contains("2. Unnamed image: /images/product.jpg"));
    }

    #[test]
    fn full_report_aggregates_heading_counts() {
        let result = extract_content(&demo_snapshot(), "all information");
        assert!(result.contains("COMPREHENSIVE WEBSITE INFORMATION:"));
        assert!(result.contains("- Headings: 25 total"));
        assert!(result.contains("Product Information:"));
    }

    #[test]
    fn general_summary_handles_partial_snapshots() {
        let partial: PageSnapshot = serde_json::from_value(serde_json::json!({
            "stats": { "headings": { "h1": 1, "h2": 3 }, "paragraphs": 7 }
        }))
        .expect("partial snapshot deserializes");

        let result = extract_content(&partial, "summarize the page");
        assert!(result.contains("Page Title: Unknown"));
        assert!(result.contains("Description: Not available"));
        assert!(result.contains("- The page contains 1 main headings and 3 subheadings"));
        assert!(result.contains("- There are 7 paragraphs of text"));
    }

    #[test]
    fn every_result_carries_query_and_processing_note() {
        let result = extract_content(&demo_snapshot(), "weather");
        assert!(result.starts_with("EXTRACTION RESULTS FOR: \"weather\"\n\n"));
        assert!(result.contains("automated system using AI processing"));
        assert!(result.contains("Timestamp: "));
    }
}
