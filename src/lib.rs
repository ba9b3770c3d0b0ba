//----------------------------------------
// Root lib
//----------------------------------------
//! Two-sample t tests: the test statistic, p-values for each alternative
//! hypothesis, power, and a Shapiro-Wilk normality check of each sample.
//! Descriptive summaries, grouped-data loading and a plain-text report back
//! the `ttcompute` binary.

/// This module houses the public API for comparing samples and for the
/// distribution, power and normality helpers behind it
pub mod compute;
/// Grouped samples loaded from records or csv
pub mod data;
/// This module contains error types
pub mod error;
pub mod hypothesis_type;
pub mod report;
pub mod summary;

mod comparison;
mod distribution;
mod normality;
mod power;
