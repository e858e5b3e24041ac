// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod node;
pub mod edge;
pub mod pool;
pub mod adjacency;
