// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        status / paths / commit
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |       model::MainModel     |
//!              |  staged/modified/untracked |
//!              '--+-----------------+-------'
//!                 |                 |
//!                 v                 v
//!               git            model::message
//!        status scan, gix     observers, channels
//!        query, CLI backend
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, config    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
