//! Product list state: source set, search term, page size, derived views

use bpcat_core::Product;

/// Page size used when the size input is invalid or non-positive.
pub const FALLBACK_PAGE_SIZE: usize = 5;

/// State of the product list view.
///
/// Owns the full product set as last fetched, the user's search term and
/// page-size threshold, and the two derived views. The derived views are
/// recomputed synchronously whenever the term, the threshold, or the
/// source set changes, so they are never stale relative to the inputs.
#[derive(Debug, Clone)]
pub struct ListState {
    /// Whether a full fetch is in flight.
    pub loading: bool,

    /// User-facing error from the last failed operation, if any.
    pub error: Option<String>,

    products: Vec<Product>,
    filtered: Vec<Product>,
    visible: Vec<Product>,
    search_term: String,
    page_size: usize,
}

impl ListState {
    /// Fresh list state with the given initial page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            loading: false,
            error: None,
            products: Vec::new(),
            filtered: Vec::new(),
            visible: Vec::new(),
            search_term: String::new(),
            page_size,
        }
    }

    /// Mark a full fetch as started: loading on, previous error cleared.
    /// The current source set stays visible until the response lands.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the source set with a fresh fetch result.
    pub fn products_loaded(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute();
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. The source set is left unchanged.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Store a trimmed, lower-cased search term and recompute the views.
    /// The empty term selects everything.
    pub fn set_search_term(&mut self, raw: &str) {
        self.search_term = raw.trim().to_lowercase();
        self.recompute();
    }

    /// Parse a raw page-size input and recompute the views.
    ///
    /// The input must parse as a positive finite number; anything else is
    /// silently replaced by [`FALLBACK_PAGE_SIZE`]. Fractional input is
    /// floored, so `"0.5"` yields an empty visible view.
    pub fn set_page_size_input(&mut self, raw: &str) {
        self.page_size = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite() && *n > 0.0)
            .map(|n| n.floor() as usize)
            .unwrap_or(FALLBACK_PAGE_SIZE);
        self.recompute();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The full source set as last fetched.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the current search term, in source order.
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// The truncated, currently displayed prefix of the filtered view.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Recompute both derived views from the source set.
    ///
    /// Filtering is a case-insensitive substring match OR-combined over
    /// `id`, `name`, and `description`. The visible view is the first
    /// `page_size` elements of the filtered view; raising the threshold
    /// is the only way to reveal more.
    fn recompute(&mut self) {
        if self.search_term.is_empty() {
            self.filtered = self.products.clone();
        } else {
            let term = self.search_term.as_str();
            self.filtered = self
                .products
                .iter()
                .filter(|p| {
                    p.id.to_lowercase().contains(term)
                        || p.name.to_lowercase().contains(term)
                        || p.description.to_lowercase().contains(term)
                })
                .cloned()
                .collect();
        }

        let count = self.page_size.min(self.filtered.len());
        self.visible = self.filtered[..count].to_vec();
    }
}
