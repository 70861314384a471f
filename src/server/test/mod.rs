//! End-to-end tests driving the assembled router through the session layer.
