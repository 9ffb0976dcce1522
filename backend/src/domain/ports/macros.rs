//! `define_port_error!` declares the error enum of a port.
//!
//! Every port failure in this crate carries a single human-readable
//! `message`, so variants are written as `Name => "format using {message}"`
//! and each expands to `Name { message: String }` with a `name(impl
//! Into<String>)` constructor. The generated `message()` reads the text back
//! regardless of variant.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $display:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant { message: String },
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = "Build [`" $name "::" $variant "`]."]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                )+

                /// Message carried by any variant.
                pub fn message(&self) -> &str {
                    match self {
                        $(Self::$variant { message })|+ => message.as_str(),
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;
