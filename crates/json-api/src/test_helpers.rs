//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use stockpile_app::{
    context::AppContext,
    domain::{
        history::MockHistoryService,
        products::{
            MockProductsService,
            models::{DEFAULT_LOW_STOCK_THRESHOLD, Product, ProductId},
        },
        transfer::MockTransferService,
    },
};

use crate::state::State;

/// Mocked services; any call without a matching expectation fails the test.
#[derive(Default)]
pub(crate) struct MockApp {
    pub(crate) products: MockProductsService,
    pub(crate) history: MockHistoryService,
    pub(crate) transfer: MockTransferService,
}

impl MockApp {
    pub(crate) fn with_products(products: MockProductsService) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub(crate) fn with_history(history: MockHistoryService) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub(crate) fn with_transfer(transfer: MockTransferService) -> Self {
        Self {
            transfer,
            ..Self::default()
        }
    }

    pub(crate) fn into_context(self) -> AppContext {
        AppContext {
            products: Arc::new(self.products),
            history: Arc::new(self.history),
            transfer: Arc::new(self.transfer),
        }
    }

    pub(crate) fn service(self, route: Router) -> Service {
        app_service(self.into_context(), route)
    }
}

pub(crate) fn app_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::shared(app, DEFAULT_LOW_STOCK_THRESHOLD)))
            .push(route),
    )
}

pub(crate) fn make_product(id: i64, sku: &str, stock: u32) -> Product {
    Product {
        id: ProductId::from_i64(id),
        sku: sku.to_string(),
        name: "Test".to_string(),
        category: "X".to_string(),
        price: 10.5,
        stock,
        supplier: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
