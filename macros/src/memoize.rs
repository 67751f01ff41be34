use super::*;

/// The maximum number of arguments of a memoized function.
const MAX_ARITY: usize = 8;

/// Memoize a function.
pub fn expand(mut func: syn::ItemFn) -> Result<proc_macro2::TokenStream> {
    let sig = &func.sig;
    if let Some(asyncness) = &sig.asyncness {
        bail!(asyncness, "async functions are not supported");
    }
    if let Some(constness) = &sig.constness {
        bail!(constness, "const functions are not supported");
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        bail!(sig.generics, "generic functions are not supported");
    }
    if sig.inputs.len() > MAX_ARITY {
        bail!(sig.inputs, "functions with more than {} arguments are not supported", MAX_ARITY);
    }

    let mut args = vec![];
    let mut types = vec![];
    for input in &sig.inputs {
        let typed = match input {
            syn::FnArg::Typed(typed) => typed,
            syn::FnArg::Receiver(_) => {
                bail!(input, "methods are not supported")
            }
        };

        let name = match typed.pat.as_ref() {
            syn::Pat::Ident(syn::PatIdent {
                by_ref: None,
                mutability: None,
                ident,
                subpat: None,
                ..
            }) => ident,
            pat => bail!(pat, "only simple identifiers are supported"),
        };

        let ty = typed.ty.as_ref();
        match ty {
            syn::Type::Reference(_) => bail!(ty, "reference arguments are not supported"),
            syn::Type::ImplTrait(_) => bail!(ty, "impl trait arguments are not supported"),
            _ => {}
        }

        args.push(name);
        types.push(ty);
    }

    let output: syn::Type = match &sig.output {
        syn::ReturnType::Default => parse_quote! { () },
        syn::ReturnType::Type(_, ty) => match ty.as_ref() {
            syn::Type::ImplTrait(_) => bail!(ty, "impl trait outputs are not supported"),
            ty => ty.clone(),
        },
    };

    // Construct a tuple from all arguments and one from their types.
    let arg_tuple = quote! { (#(#args,)*) };
    let type_tuple = quote! { (#(#types,)*) };

    // Construct assertions that the arguments and the output fulfill the
    // necessary bounds.
    let bounds = types.iter().map(|ty| {
        quote! {
            ::memofn::internal::assert_argument::<#ty>();
        }
    });

    // Construct the inner closure.
    let body = &func.block;
    let closure = quote! { |#arg_tuple: #type_tuple| -> #output #body };

    // Adjust the function's body.
    func.block = parse_quote! { {
        #(#bounds)*
        ::memofn::internal::assert_output::<#output>();
        static FUNCTION: ::std::sync::LazyLock<
            ::memofn::Function<#type_tuple, #output>,
        > = ::std::sync::LazyLock::new(|| ::memofn::internal::memoized(#closure));
        FUNCTION.call(#arg_tuple)
    } };

    Ok(quote! { #func })
}
