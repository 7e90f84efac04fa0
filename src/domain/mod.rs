//! Domain Layer
//!
//! This is the core of the project picker - pure tree, filter and selection
//! logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ProjectTree, SelectionTree)
//! - `value_objects/` - Immutable value types (ProjectId, VisibleSet)
//! - `services/` - Domain services (filtering)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services take the tree explicitly and are stateless
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
