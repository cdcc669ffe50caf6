use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;

/// Generate a color model from a struct with exactly three component fields.
///
/// Type parameters on the struct are treated as marker tags and get a
/// `PhantomData` field each, so the struct can be used as `Model<Tag>`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    if field_names.iter().any(Option::is_none) {
        return quote! {
            compile_error!("Model components must be named fields.");
        }
        .into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let mut tags = vec![];
    for param in input.generics.params.iter() {
        match param {
            syn::GenericParam::Type(type_param) => tags.push(type_param.ident.clone()),
            _ => {
                return quote! {
                    compile_error!("Models only support type parameters as tags.");
                }
                .into();
            }
        }
    }

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        for tag in tags.iter() {
            let field_name = format!("_{}", tag.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            let field: syn::Field = syn::parse_quote! {
                #field_name: std::marker::PhantomData<#tag>
            };
            named.named.push(field);
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, _) = input.generics.split_for_impl();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen {
            /// Create a new color in this model.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl #impl_gen From<crate::color::Components> for #struct_name #type_gen {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for crate::color::Components {
            fn from(value: #struct_name #type_gen) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
