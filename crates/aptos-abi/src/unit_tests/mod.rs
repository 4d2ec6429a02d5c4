// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

mod cached_abis_test;
mod proptest_types;
mod registry_test;
mod value_test;
