//! HTTP-level tests driving the router against the in-memory store.

mod helpers;

mod admin_test;
mod allotment_test;
mod auth_test;
mod receipt_test;
mod seed_test;
