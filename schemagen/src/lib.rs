//! # schemagen
//!
//! Schema-driven C# code generation for the Colyseus schema runtime.
//!
//! A schema front end resolves classes, interfaces, and enums into a
//! [`Context`](schema::Context); this crate renders one C# source file per
//! descriptor.
//!
//! ## Features
//!
//! - **Schema-tracked classes** - `Schema` subclasses with `[Type]` wire attributes
//! - **Container-aware typing** - `ArraySchema<T>`, `MapSchema<T>`, and friends
//! - **Data carriers** - MessagePack DTOs with flattened collections
//! - **Enums and constant groups** - integer enums or typed constant structs
//!
//! ## Quick Start
//!
//! ```
//! use schemagen::prelude::*;
//!
//! let mut context = Context::new();
//! context.add_class(
//!     ClassDef::new("Player", "Schema")
//!         .with_property(PropertyDef::new("hp", 0, "int32"))
//!         .with_property(PropertyDef::new("items", 1, "array").with_child_type("string")),
//! );
//!
//! let files = generate(&context, &GenerateOptions::new()).unwrap();
//! assert_eq!(files[0].name, "Player.cs");
//! assert!(files[0].content.contains("public ArraySchema<string> items = new();"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Descriptor model, context loading, validation
//! - [`codegen`] - Type resolution and C# rendering

pub mod prelude;

/// Descriptor model, context loading, and validation.
pub mod schema {
    pub use schemagen_schema::*;
}

/// Type resolution and C# rendering.
pub mod codegen {
    pub use schemagen_codegen::*;
}
