//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span};
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro generating a `Solver` impl that dispatches to `PartSolver<N>`
///
/// # Attributes
///
/// - `parts`: Required. Number of parts; every `PartSolver<1..=parts>` must be implemented.
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver)]
/// #[puzzle_solver(parts = 2)]
/// struct Day20;
///
/// impl PartSolver<1> for Day20 { /* ... */ }
/// impl PartSolver<2> for Day20 { /* ... */ }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(puzzle_solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_puzzle_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_puzzle_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle_solver"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "PuzzleSolver derive requires #[puzzle_solver(parts = N)]",
            )
        })?;

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => parts = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "expected an integer")),
            }
            Ok(())
        } else {
            Err(meta.error("unsupported puzzle_solver attribute"))
        }
    })?;

    let parts = parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `parts`"))?;
    if parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`parts` must be at least 1"));
    }

    let arms = (1..=parts).map(|n| {
        let n = Literal::u8_unsuffixed(n);
        quote! {
            #n => <Self as ::puzzle_solver::PartSolver<#n>>::solve(shared),
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::puzzle_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::puzzle_solver::PuzzleParser>::Shared,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::puzzle_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::puzzle_solver::SolveError::PartOutOfRange {
                        part,
                        parts: #parts,
                    }),
                }
            }
        }
    })
}

/// Derive macro submitting the type to the plugin registry
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2020)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid"])
///
/// The type must implement `Solver` and be `'static`.
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver, AutoRegisterSolver)]
/// #[puzzle_solver(parts = 2)]
/// #[puzzle(year = 2020, day = 20, tags = ["grid"])]
/// struct Day20;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(puzzle))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "AutoRegisterSolver derive requires #[puzzle(year = .., day = ..)]",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported puzzle attribute"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day`"))?;
    let tag_strs = tags.iter().map(String::as_str);

    Ok(quote! {
        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                year: #year,
                day: #day,
                tags: &[#(#tag_strs),*],
                entry: ::puzzle_solver::SolverEntry::of::<#name>(),
            }
        }
    })
}
