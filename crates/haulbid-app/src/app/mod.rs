//! Application use cases

pub mod quote_service;

pub use quote_service::{
    export_quote, prepare_quote, Quote, QuoteOptions, QuoteServiceError,
};
