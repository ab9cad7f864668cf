//! Session actions and the reducer that applies them.

use crate::catalog::Product;
use crate::ids::{ProductId, SellerId, ServiceId};
use crate::notice::Notice;
use crate::search::ProductFilters;
use crate::session::{AppMode, AppState, HeaderConfig, View};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Something the shopper did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Navigate {
        view: View,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        filters: Option<ProductFilters>,
    },
    Back,
    SubmitSearch { query: String },
    ViewCategory { name: String },
    SetMode { mode: AppMode },
    SelectProduct { id: ProductId },
    SelectService { id: ServiceId },
    SelectSeller { id: SellerId },
    SetLocation { location: String },
    AddToCart { product: Product, quantity: u32 },
    RemoveFromCart { id: ProductId },
}

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AppState,
    /// Message to show the shopper, if any.
    pub notice: Option<Notice>,
}

impl Transition {
    fn quiet(state: AppState) -> Self {
        Self {
            state,
            notice: None,
        }
    }
}

/// Apply `action` to `state`.
pub fn reduce(mut state: AppState, action: Action) -> Transition {
    debug!(view = %state.view, ?action, "reduce");

    match action {
        Action::Navigate {
            view,
            category,
            filters,
        } => {
            navigate(&mut state, view, category, filters);
            Transition::quiet(state)
        }
        Action::Back => {
            let target = match (state.header.previous_view, state.mode) {
                (Some(previous), _) => previous,
                (None, AppMode::Products) => View::Products,
                (None, _) => View::Home,
            };
            navigate(&mut state, target, None, None);
            Transition::quiet(state)
        }
        Action::SubmitSearch { query } => {
            let previous = state.view;
            state.search.query = query;
            navigate(&mut state, View::Products, None, None);
            state.header =
                HeaderConfig::with_back(format!("Busca: \"{}\"", state.search.query), previous);
            Transition::quiet(state)
        }
        Action::ViewCategory { name } => {
            let previous = state.view;
            navigate(&mut state, View::Products, Some(name.clone()), None);
            state.search.query.clear();
            state.header = HeaderConfig::with_back(name, previous);
            Transition::quiet(state)
        }
        Action::SetMode { mode } => {
            state.search.query.clear();
            match mode {
                AppMode::Sellers => {
                    state.mode = AppMode::Stays;
                    navigate(&mut state, View::Explore, None, None);
                }
                AppMode::Products => {
                    state.mode = AppMode::Products;
                    navigate(&mut state, View::Products, None, None);
                }
                AppMode::Services => {
                    state.mode = AppMode::Services;
                    navigate(&mut state, View::Services, None, None);
                }
                AppMode::Stays | AppMode::None => {}
            }
            Transition::quiet(state)
        }
        Action::SelectProduct { id } => {
            state.selected_product = Some(id);
            navigate(&mut state, View::ProductDetail, None, None);
            Transition::quiet(state)
        }
        Action::SelectService { id } => {
            state.selected_service = Some(id);
            navigate(&mut state, View::ServiceDetail, None, None);
            Transition::quiet(state)
        }
        Action::SelectSeller { id } => {
            state.selected_seller = Some(id);
            navigate(&mut state, View::SellerProfile, None, None);
            Transition::quiet(state)
        }
        Action::SetLocation { location } => {
            state.location = location;
            Transition::quiet(state)
        }
        Action::AddToCart { product, quantity } => {
            let notice = match state.cart.add(product, quantity) {
                Ok(notice) => notice,
                Err(err) => {
                    warn!(error = %err, "cart add rejected");
                    Notice::warning(err.to_string())
                }
            };
            Transition {
                state,
                notice: Some(notice),
            }
        }
        Action::RemoveFromCart { id } => {
            state.cart.remove(id);
            Transition::quiet(state)
        }
    }
}

fn navigate(
    state: &mut AppState,
    view: View,
    category: Option<String>,
    filters: Option<ProductFilters>,
) {
    if view != View::Products {
        state.search.query.clear();
    }

    let filters = filters.filter(|f| *f != ProductFilters::default());
    state.header = if view.is_top_level() && filters.is_none() {
        HeaderConfig::main()
    } else {
        HeaderConfig::with_back(view.title(filters.as_ref()), state.view)
    };

    state.search.category = category;
    state.search.filters = filters.unwrap_or_default();
    state.view = view;
}
