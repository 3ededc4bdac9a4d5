use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "useSelenium")]
    pub use_selenium: bool,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default, rename = "scrapedData")]
    pub scraped_data: Option<PageSnapshot>,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub query: String,
    #[serde(rename = "extractedContent")]
    pub extracted_content: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: String,
}

/// Simulated scrape result for a single page.
///
/// Also accepted back on the extraction endpoint, where it arrives from the
/// client and may be missing any of its sections, so every field falls back
/// to its default on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    pub success: bool,
    pub url: String,
    pub timestamp: String,
    pub method: String,
    pub metadata: Option<PageMetadata>,
    pub stats: Option<PageStats>,
    pub content: Option<PageContent>,
    pub performance: Option<PagePerformance>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub language: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageStats {
    pub headings: HeadingCounts,
    pub paragraphs: u32,
    pub links: u32,
    pub images: u32,
    pub tables: u32,
    pub forms: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingCounts {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageContent {
    pub headings: Vec<PageHeading>,
    pub main_text: String,
    pub links: Vec<PageLink>,
    pub images: Vec<PageImage>,
    pub tables: Vec<PageTable>,
    pub contact_info: Option<ContactInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageHeading {
    #[serde(rename = "type")]
    pub level: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageImage {
    pub alt: String,
    pub src: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PagePerformance {
    pub load_time: String,
    pub resource_count: u32,
    pub javascript_files: u32,
    pub css_files: u32,
}
