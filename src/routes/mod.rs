/// Router Module Index
///
/// Splits the HTTP surface in two: the page routes that make up the
/// browser-visible URL space, and the JSON API that publishes the table.

/// Shell-serving routes generated from the route table.
pub mod pages;

/// Health probe and route table endpoints.
pub mod api;
