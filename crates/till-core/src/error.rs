//! # Validation Problems
//!
//! Line-level diagnostics produced by order validation.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Problem Propagation                                  │
//! │                                                                         │
//! │  validate_order (this crate)                                           │
//! │       │ Vec<ValidationProblem>  ← one per failing line, all collected  │
//! │       ▼                                                                 │
//! │  CheckoutError::Rejected (till-store)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (server) ← 400 with {id, message} per problem                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Problems are data, not panics: a request with bad lines is a normal
//!    outcome, answered with the full diagnostic list
//! 2. Use `thiserror` for the message rendering - the `Display` strings
//!    are the exact messages clients see
//! 3. Include context in messages (available vs requested for stock)

use thiserror::Error;

// =============================================================================
// Problem Kind
// =============================================================================

/// Why a single order line was rejected.
///
/// At most one of these is reported per line; the first failing check wins
/// (a line for an unknown product is `NotFound` even if its quantity is
/// also garbage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProblemKind {
    /// The product id is absent from the catalog.
    #[error("Product not found")]
    NotFound,

    /// The requested quantity is not a positive integer.
    ///
    /// Covers zero, negatives, and anything that never was an integer on
    /// the wire (`1.5`, numbers beyond i64 range).
    #[error("Invalid quantity")]
    InvalidQuantity,

    /// The product exists and the quantity is valid, but stock is short.
    #[error("Insufficient stock: have {available}, need {requested}")]
    InsufficientStock { available: i64, requested: i64 },
}

// =============================================================================
// Validation Problem
// =============================================================================

/// One rejected order line: which product, and why.
///
/// A request is admitted only if validation produced zero of these;
/// a single problem rejects the entire order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("product {product_id}: {kind}")]
pub struct ValidationProblem {
    /// The product id the client sent (even if it matched nothing).
    pub product_id: i64,

    /// What was wrong with the line.
    pub kind: ProblemKind,
}

impl ValidationProblem {
    /// Creates a NotFound problem for an unknown product id.
    pub fn not_found(product_id: i64) -> Self {
        ValidationProblem {
            product_id,
            kind: ProblemKind::NotFound,
        }
    }

    /// Creates an InvalidQuantity problem.
    pub fn invalid_quantity(product_id: i64) -> Self {
        ValidationProblem {
            product_id,
            kind: ProblemKind::InvalidQuantity,
        }
    }

    /// Creates an InsufficientStock problem reporting both quantities.
    pub fn insufficient_stock(product_id: i64, available: i64, requested: i64) -> Self {
        ValidationProblem {
            product_id,
            kind: ProblemKind::InsufficientStock {
                available,
                requested,
            },
        }
    }

    /// The client-facing message for this problem, without the product id.
    ///
    /// The id travels in its own field on the wire, so the message is just
    /// the kind rendering: `"Product not found"`, `"Invalid quantity"`, or
    /// `"Insufficient stock: have 2, need 3"`.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
