//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
extern crate proc_macro;
extern crate proc_macro2;
extern crate syn;
#[macro_use]
extern crate quote;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{
    parse_macro_input, Data, DeriveInput, Fields, GenericArgument, LitStr, PathArguments, Type,
};

/// Derive macro to declare a model value object.
///
/// Every field of the struct must be an `Option<T>`: `None` means the field
/// is absent, and absence is kept through construction, map conversion and
/// equality. The macro generates:
///
/// - `new()`, with every field absent
/// - for each field `f`: a getter `f()`, a fluent setter `with_f()` and a
///   presence setter `set_f()`
/// - for `SymbolicField<E>` fields: a strict accessor `f_symbol()`
/// - for `HashMap<String, V>` fields marked `#[model(entries)]`:
///   `add_f_entry()`, which rejects duplicate keys, and `clear_f_entries()`
/// - implementations of `ValueObject`, `ToFieldValue`, `FromFieldValue` and
///   `Display`
///
/// The `model` attribute accepts `name = "WireName"` to override the wire
/// name (by default the PascalCase form of the field name), `entries` as
/// described above, and `strict` on a symbolic field to validate its
/// vocabulary whenever the value object is decoded.
#[proc_macro_derive(ValueObject, attributes(model))]
pub fn value_object(input: TokenStream) -> TokenStream {
    // Parse input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    match impl_value_object(input) {
        Ok(ts) => TokenStream::from(ts),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

// How a field's inner (non-Option) type is surfaced by the generated accessors.
enum FieldKind {
    Str,
    Copy,
    Symbolic(Type),
    List,
    Map(Type),
    Other,
}

struct ModelField {
    ident: syn::Ident,
    inner: Type,
    kind: FieldKind,
    wire_name: String,
    entries: bool,
    strict: bool,
}

fn impl_value_object(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_string = name.to_string();

    // check that input.data is Struct (vs Enum vs Union)
    let ds = match input.data {
        Data::Struct(d) => d,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "ValueObject only supports Struct datatypes",
            ))
        }
    };
    let named = match ds.fields {
        Fields::Named(n) => n.named,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "ValueObject requires a struct with named fields",
            ))
        }
    };

    let mut fields: Vec<ModelField> = Vec::new();
    for field in named {
        let ident = match field.ident.clone() {
            Some(id) => id,
            None => return Err(syn::Error::new_spanned(&field, "field is missing ident")),
        };

        let mut wire_name: Option<String> = None;
        let mut entries = false;
        let mut strict = false;
        for a in &field.attrs {
            if !a.path().is_ident("model") {
                continue;
            }
            a.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let s: LitStr = meta.value()?.parse()?;
                    wire_name = Some(s.value());
                    Ok(())
                } else if meta.path.is_ident("entries") {
                    entries = true;
                    Ok(())
                } else if meta.path.is_ident("strict") {
                    strict = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported model attribute"))
                }
            })?;
        }

        let inner = match option_inner(&field.ty) {
            Some(t) => t.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "ValueObject fields must be Option<T> so absence is preserved",
                ))
            }
        };
        let kind = classify(&inner);

        if entries && !matches!(kind, FieldKind::Map(_)) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "#[model(entries)] requires a HashMap<String, V> field",
            ));
        }
        if strict && !matches!(kind, FieldKind::Symbolic(_)) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "#[model(strict)] requires a SymbolicField<E> field",
            ));
        }

        let wire_name = wire_name.unwrap_or_else(|| pascal_case(&ident.to_string()));
        fields.push(ModelField {
            ident,
            inner,
            kind,
            wire_name,
            entries,
            strict,
        });
    }

    let krate = quote! { ::ddb_model_rust_sdk };

    let mut inits = TokenStream2::default();
    let mut accessors = TokenStream2::default();
    let mut writes = TokenStream2::default();
    let mut reads = TokenStream2::default();
    let mut display = TokenStream2::default();
    let mut wire_names: Vec<String> = Vec::new();

    for f in &fields {
        let fname = &f.ident;
        let inner = &f.inner;
        let wire = &f.wire_name;
        wire_names.push(wire.clone());
        let with_fn = format_ident!("with_{}", fname);
        let set_fn = format_ident!("set_{}", fname);

        inits.extend(quote! { #fname: None, });

        let getter = match &f.kind {
            FieldKind::Str => quote! {
                pub fn #fname(&self) -> Option<&str> {
                    self.#fname.as_deref()
                }
            },
            FieldKind::Copy => quote! {
                pub fn #fname(&self) -> Option<#inner> {
                    self.#fname
                }
            },
            FieldKind::Symbolic(_) => quote! {
                pub fn #fname(&self) -> Option<&str> {
                    self.#fname.as_ref().map(|v| v.as_str())
                }
            },
            FieldKind::List => {
                let elem = first_generic(inner);
                quote! {
                    pub fn #fname(&self) -> Option<&[#elem]> {
                        self.#fname.as_deref()
                    }
                }
            }
            FieldKind::Map(_) | FieldKind::Other => quote! {
                pub fn #fname(&self) -> Option<&#inner> {
                    self.#fname.as_ref()
                }
            },
        };
        accessors.extend(getter);
        accessors.extend(quote! {
            pub fn #with_fn(mut self, value: impl Into<#inner>) -> Self {
                self.#fname = Some(value.into());
                self
            }
            pub fn #set_fn(&mut self, value: Option<#inner>) -> &mut Self {
                self.#fname = value;
                self
            }
        });

        if let FieldKind::Symbolic(sym) = &f.kind {
            let symbol_fn = format_ident!("{}_symbol", fname);
            accessors.extend(quote! {
                pub fn #symbol_fn(&self) -> Result<#sym, #krate::ModelError> {
                    #krate::SymbolicField::require(self.#fname.as_ref())
                        .map_err(|e| e.within(#name_string, #wire))
                }
            });
        }

        if f.entries {
            if let FieldKind::Map(val) = &f.kind {
                let add_fn = format_ident!("add_{}_entry", fname);
                let clear_fn = format_ident!("clear_{}_entries", fname);
                accessors.extend(quote! {
                    pub fn #add_fn(
                        &mut self,
                        key: impl Into<String>,
                        value: impl Into<#val>,
                    ) -> Result<&mut Self, #krate::ModelError> {
                        #krate::types::add_entry(&mut self.#fname, key.into(), value.into())
                            .map_err(|e| e.within(#name_string, #wire))?;
                        Ok(self)
                    }
                    pub fn #clear_fn(&mut self) -> &mut Self {
                        self.#fname = None;
                        self
                    }
                });
            }
        }

        writes.extend(quote! {
            #krate::types::write_field(&mut m, #wire, &self.#fname);
        });
        reads.extend(quote! {
            res.#fname = #krate::types::read_field(value, #name_string, #wire, config)?;
        });
        if let FieldKind::Symbolic(_) = &f.kind {
            let strict = f.strict;
            reads.extend(quote! {
                if #strict || config.strict_symbols() {
                    if let Some(s) = &res.#fname {
                        s.validate().map_err(|e| e.within(#name_string, #wire))?;
                    }
                }
            });
        }
        display.extend(quote! {
            (#wire, self.#fname.as_ref().map(|v| v as &dyn ::std::fmt::Debug)),
        });
    }

    let num_fields = fields.len();

    let expanded = quote! {
        impl #name {
            /// Create a new value with every field absent.
            pub fn new() -> Self {
                #name { #inits }
            }

            #accessors
        }

        impl #krate::types::ValueObject for #name {
            const TYPE_NAME: &'static str = #name_string;
            const FIELD_NAMES: &'static [&'static str] = &[#(#wire_names),*];

            fn to_map_value(&self) -> #krate::types::MapValue {
                let mut m = #krate::types::MapValue::new();
                #writes
                m
            }

            fn from_map_value_with(
                value: &#krate::types::MapValue,
                config: &#krate::ModelConfig,
            ) -> Result<Self, #krate::ModelError> {
                #krate::types::check_fields(value, #name_string, Self::FIELD_NAMES, config)?;
                let mut res = #name::new();
                #reads
                Ok(res)
            }
        }

        impl #krate::types::ToFieldValue for #name {
            fn to_field_value(&self) -> #krate::types::FieldValue {
                #krate::types::FieldValue::Map(#krate::types::ValueObject::to_map_value(self))
            }
        }

        impl #krate::types::FromFieldValue for #name {
            fn from_field_with(
                fv: &#krate::types::FieldValue,
                config: &#krate::ModelConfig,
            ) -> Result<Self, #krate::ModelError> {
                let m = #krate::types::expect_map(fv, #name_string)?;
                <#name as #krate::types::ValueObject>::from_map_value_with(m, config)
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let fields: [(&str, Option<&dyn ::std::fmt::Debug>); #num_fields] = [#display];
                #krate::types::display_fields(f, &fields)
            }
        }
    };

    //println!("expanded=\n{}\n", expanded);
    Ok(expanded)
}

fn option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(p) = ty {
        let seg = p.path.segments.last()?;
        if seg.ident != "Option" {
            return None;
        }
        if let PathArguments::AngleBracketed(args) = &seg.arguments {
            if let Some(GenericArgument::Type(t)) = args.args.first() {
                return Some(t);
            }
        }
    }
    None
}

fn generic_types(ty: &Type) -> Vec<Type> {
    let mut v = Vec::new();
    if let Type::Path(p) = ty {
        if let Some(seg) = p.path.segments.last() {
            if let PathArguments::AngleBracketed(args) = &seg.arguments {
                for a in &args.args {
                    if let GenericArgument::Type(t) = a {
                        v.push(t.clone());
                    }
                }
            }
        }
    }
    v
}

fn first_generic(ty: &Type) -> Type {
    // classify() only reports List for types carrying a generic argument
    generic_types(ty).remove(0)
}

fn classify(ty: &Type) -> FieldKind {
    let ident = match ty {
        Type::Path(p) => match p.path.segments.last() {
            Some(seg) => seg.ident.to_string(),
            None => return FieldKind::Other,
        },
        _ => return FieldKind::Other,
    };
    let args = generic_types(ty);
    match ident.as_str() {
        "String" => FieldKind::Str,
        "bool" | "i32" | "i64" | "f64" => FieldKind::Copy,
        "SymbolicField" if args.len() == 1 => FieldKind::Symbolic(args[0].clone()),
        "Vec" if args.len() == 1 => FieldKind::List,
        "HashMap" if args.len() == 2 => FieldKind::Map(args[1].clone()),
        _ => FieldKind::Other,
    }
}

fn pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for part in s.split('_').filter(|p| !p.is_empty()) {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
