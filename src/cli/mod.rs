// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

pub mod args;
pub mod config;
