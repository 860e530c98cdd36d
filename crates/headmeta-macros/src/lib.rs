//! Proc-macros for the headmeta configuration model.
//!
//! Provides a derive macro that gives every metadata section a field-wise
//! deep merge, a one-level overlay and `KEY=VALUE` override support.

use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::{Attribute, Data, DeriveInput, Fields, Type, parse_macro_input};

/// Attribute configuration for a field.
#[derive(Default)]
struct FieldConfig {
  /// The override key (defaults to the camelCase field name).
  key: Option<String>,

  /// Whether this field is a nested section with its own overrides.
  nested: bool,

  /// Whether this field cannot be set from a single string value.
  skip: bool,
}

impl FieldConfig {
  fn from_attrs(attrs: &[Attribute]) -> Self {
    let mut config = Self::default();

    for attr in attrs {
      if !attr.path().is_ident("config") {
        continue;
      }

      let _ = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("key") {
          let value = meta.value()?;
          let lit: syn::LitStr = value.parse()?;
          config.key = Some(lit.value());
        } else if meta.path.is_ident("nested") {
          config.nested = true;
        } else if meta.path.is_ident("skip") {
          config.skip = true;
        }
        Ok(())
      });
    }

    config
  }
}

/// Converts a `snake_case` identifier into the camelCase key used in
/// configuration files.
fn camel_case(ident: &str) -> String {
  let mut out = String::with_capacity(ident.len());
  let mut upper_next = false;
  for ch in ident.chars() {
    if ch == '_' {
      upper_next = true;
    } else if upper_next {
      out.extend(ch.to_uppercase());
      upper_next = false;
    } else {
      out.push(ch);
    }
  }
  out
}

/// Derive macro for metadata section structs.
///
/// Generates `apply_override`, `merge_fields`, `overlay_fields` and an
/// implementation of `crate::merge::Merge` that delegates to `merge_fields`.
#[proc_macro_derive(Configurable, attributes(config))]
pub fn derive_configurable(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) =
    input.generics.split_for_impl();

  let fields = match &input.data {
    Data::Struct(data) => &data.fields,
    _ => {
      return syn::Error::new_spanned(
        input,
        "Configurable can only be derived for structs",
      )
      .to_compile_error()
      .into();
    },
  };

  let field_handlers = generate_field_handlers(fields);
  let merge_handlers = generate_merge_handlers(fields);
  let overlay_handlers = generate_overlay_handlers(fields);

  let expanded = quote! {
    impl #impl_generics #name #ty_generics #where_clause {
      /// Apply a configuration override by key.
      ///
      /// # Errors
      ///
      /// Returns an error if the key is unknown or the value cannot be
      /// parsed for that field.
      pub fn apply_override(
        &mut self,
        key: &str,
        value: &str,
      ) -> std::result::Result<(), crate::error::ConfigError> {
        use crate::error::ConfigError;

        #(#field_handlers)*

        Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'",
        )))
      }

      /// Merge another value into this one, field by field.
      ///
      /// Fields the other value leaves unset are kept, records are merged
      /// recursively and everything else is replaced.
      pub fn merge_fields(&mut self, other: Self) {
        #(#merge_handlers)*
      }

      /// Overlay another value onto this one without recursing.
      ///
      /// Every field the other value sets replaces ours whole; unset fields
      /// are kept.
      pub fn overlay_fields(&mut self, other: Self) {
        #(#overlay_handlers)*
      }
    }

    impl #impl_generics crate::merge::Merge for #name #ty_generics #where_clause {
      fn merge(&mut self, other: Self) {
        self.merge_fields(other);
      }
    }
  };

  TokenStream::from(expanded)
}

fn generate_field_handlers(fields: &Fields) -> Vec<proc_macro2::TokenStream> {
  let mut handlers = Vec::new();

  for field in fields {
    let field_config = FieldConfig::from_attrs(&field.attrs);
    if field_config.skip {
      continue;
    }

    let field_name = field.ident.as_ref().expect("Named field required");
    let field_key = field_config
      .key
      .clone()
      .unwrap_or_else(|| camel_case(&field_name.to_string()));

    let handler = if field_config.nested {
      generate_nested_handler(field_name, &field_key)
    } else {
      generate_value_handler(field_name, &field_key, &field.ty)
    };
    handlers.push(handler);
  }

  handlers
}

fn generate_nested_handler(
  field_name: &syn::Ident,
  base_key: &str,
) -> proc_macro2::TokenStream {
  let prefix = format!("{base_key}.");

  quote! {
    if let Some(subkey) = key.strip_prefix(#prefix) {
      return self
        .#field_name
        .get_or_insert_with(Default::default)
        .apply_override(subkey, value);
    }
  }
}

fn generate_value_handler(
  field_name: &syn::Ident,
  field_key: &str,
  field_type: &Type,
) -> proc_macro2::TokenStream {
  let type_str = field_type.to_token_stream().to_string().replace(' ', "");

  let assignment = if type_str == "Option<bool>" {
    quote! {
      self.#field_name = Some(match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => true,
        "false" | "no" | "0" => false,
        _ => {
          return Err(ConfigError::Config(format!(
            "Invalid boolean value for '{}': '{}'. Expected true/false, yes/no, or 1/0",
            #field_key, value
          )));
        }
      });
    }
  } else if type_str.starts_with("Option<") {
    // An empty value unsets the field
    quote! {
      self.#field_name = if value.is_empty() {
        None
      } else {
        Some(value.parse().map_err(|_| ConfigError::Config(format!(
          "Invalid value for '{}': '{}'",
          #field_key, value
        )))?)
      };
    }
  } else {
    quote! {
      self.#field_name = value.parse().map_err(|_| ConfigError::Config(format!(
        "Invalid value for '{}': '{}'",
        #field_key, value
      )))?;
    }
  };

  quote! {
    if key == #field_key {
      #assignment
      return Ok(());
    }
  }
}

fn generate_merge_handlers(fields: &Fields) -> Vec<proc_macro2::TokenStream> {
  let mut handlers = Vec::new();

  for field in fields {
    let field_name = field.ident.as_ref().expect("Named field required");
    let type_str = field.ty.to_token_stream().to_string().replace(' ', "");

    let handler = if type_str.starts_with("Option<") {
      // Unset in other: keep ours. Set in both: merge the values.
      quote! {
        match (self.#field_name.as_mut(), other.#field_name) {
          (Some(current), Some(incoming)) => {
            crate::merge::Merge::merge(current, incoming);
          }
          (None, Some(incoming)) => {
            self.#field_name = Some(incoming);
          }
          _ => {}
        }
      }
    } else {
      quote! {
        crate::merge::Merge::merge(&mut self.#field_name, other.#field_name);
      }
    };

    handlers.push(handler);
  }

  handlers
}

fn generate_overlay_handlers(
  fields: &Fields,
) -> Vec<proc_macro2::TokenStream> {
  let mut handlers = Vec::new();

  for field in fields {
    let field_name = field.ident.as_ref().expect("Named field required");
    let type_str = field.ty.to_token_stream().to_string().replace(' ', "");

    let handler = if type_str.starts_with("Option<") {
      quote! {
        if other.#field_name.is_some() {
          self.#field_name = other.#field_name;
        }
      }
    } else {
      quote! {
        self.#field_name = other.#field_name;
      }
    };

    handlers.push(handler);
  }

  handlers
}
