/// Declare a configuration record together with its partial-override twin.
///
/// The record gets `Default` from the per-field default expressions. The
/// override type holds every field as `Option` and resolves per field:
/// a present override wins, an absent one falls back to the base record.
///
/// Usage:
/// `config_with_overrides! {
///     pub struct TimingConfig / TimingOverrides {
///         candle_interval: f64 = 4.0,
///     }
/// }`
#[macro_export]
macro_rules! config_with_overrides {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident / $overrides:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty = $default:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self { $( $field: $default, )+ }
            }
        }

        #[doc = concat!("Partial override of [`", stringify!($name), "`]; absent fields keep the base value.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        $vis struct $overrides {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $overrides {
            /// Apply the overrides on top of `base`, field by field.
            pub fn apply(&self, base: &$name) -> $name {
                $name {
                    $( $field: self.$field.clone().unwrap_or_else(|| base.$field.clone()), )+
                }
            }

            /// Resolve against the built-in defaults.
            pub fn resolve(&self) -> $name {
                self.apply(&<$name as Default>::default())
            }

            /// True when no field is overridden.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )+
            }
        }
    };
}
