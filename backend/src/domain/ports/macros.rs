//! `define_port_error!` generates port error enums with snake_case
//! constructors whose `String` parameters accept anything `Into<String>`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };
    (@ctor $variant:ident { $($field:ident : $ty:ty),* }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ShelfPortError {
            Offline { message: String } => "shelf offline: {message}",
            Short { missing: u32 } => "short by {missing}",
            Jammed { message: String, slot: u32 } => "jammed at {slot}: {message}",
            Closed => "shelf closed",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(ShelfPortError::offline("timeout").to_string(), "shelf offline: timeout");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        assert_eq!(ShelfPortError::short(3_u32).to_string(), "short by 3");
    }

    #[test]
    fn mixed_fields_follow_declaration_order() {
        let err = ShelfPortError::jammed("coin stuck", 7_u32);
        assert_eq!(err.to_string(), "jammed at 7: coin stuck");
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(ShelfPortError::closed(), ShelfPortError::Closed);
    }
}
