//! Tiny Sitemap - a sitemap-index generator library
//!
//! This library turns an ordered list of URLs into a sitemap-index XML
//! document and writes it to disk, and can parse such documents back.

pub mod sitemap;
