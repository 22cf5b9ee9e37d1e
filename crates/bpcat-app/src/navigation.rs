//! Routes the engine can navigate between
//!
//! Navigation is an explicit capability: handlers emit a
//! [`crate::handler::UpdateAction::Navigate`] and the engine performs it,
//! invoking the target view's entry hook. Nothing reloads as a hidden
//! side effect of a route-change listener.

/// A navigable location in the catalog UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The product list (base path).
    ProductList,
    /// The form in create mode.
    ProductCreate,
    /// The form in edit mode for the given identifier.
    ProductEdit(String),
}

impl Route {
    /// Render the route as a URL path.
    pub fn to_path(&self) -> String {
        match self {
            Route::ProductList => "/products".to_string(),
            Route::ProductCreate => "/products/new".to_string(),
            Route::ProductEdit(id) => format!("/products/{id}/edit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::ProductList.to_path(), "/products");
        assert_eq!(Route::ProductCreate.to_path(), "/products/new");
        assert_eq!(
            Route::ProductEdit("P001".to_string()).to_path(),
            "/products/P001/edit"
        );
    }
}
