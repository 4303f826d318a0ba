// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Test harness for task invocation against local hosts.

#![allow(dead_code)]

pub mod mock_host;
