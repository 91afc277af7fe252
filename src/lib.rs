//! Two-User NOMA Downlink Simulation Library
//!
//! Monte Carlo evaluation of a two-user Non-Orthogonal Multiple Access
//! downlink against an OFDMA baseline, over a Rayleigh fading channel with
//! distance-dependent path loss. For each nominal SNR operating point the
//! sweep draws fresh fading realizations for both users, computes
//! per-realization SINRs under successive interference cancellation, and
//! reduces them into throughput and outage statistics.
//!
//! ## Modules
//!
//! - `channel`: Rayleigh fading sample generator with path loss
//! - `sweep`: per-SNR-point evaluator and the sweep orchestrator
//! - `config`: run description, validation and YAML loading
//! - `report`: result table printing, summary statistics, CSV export
//! - `error`: error taxonomy
//!
//! ## Usage
//!
//! ```bash
//! # Run the canonical scenario and save the result table
//! cargo run --bin sweep --release -- --seed 42 --output noma_throughput_statistics.csv
//!
//! # Run a scenario described in YAML
//! cargo run --bin sweep --release -- --config config/noma.yaml
//! ```

pub mod channel;
pub mod config;
pub mod error;
pub mod report;
pub mod sweep;
