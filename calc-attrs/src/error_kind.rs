use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
};

/// The tags given in the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Collects the tags of every `error` attribute in the list. Later tags replace earlier ones.
    fn from_attributes(attributes: &[Attribute]) -> Result<Self> {
        let mut args = ErrorArgs::default();

        for attr in attributes.iter().filter(|attr| attr.path().is_ident("error")) {
            attr.parse_nested_meta(|meta| {
                let slot = if meta.path.is_ident("message") {
                    &mut args.message
                } else if meta.path.is_ident("labels") {
                    &mut args.labels
                } else if meta.path.is_ident("help") {
                    &mut args.help
                } else {
                    return Err(meta.error("unknown tag; expected `message`, `labels`, or `help`"));
                };

                *slot = Some(meta.value()?.parse()?);
                Ok(())
            })?;
        }

        Ok(args)
    }
}

/// Creates a `let` expression that destructures the given `ident` into its named fields. Returns
/// a compile error if the fields are not named.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| {
                let field_name = field.ident.as_ref();
                quote! { #field_name }
            });
            quote! { let #ident { #(#fields),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// The target struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        // outer attributes include documentation as well as `error`
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        Ok(ErrorKindTarget {
            error_args: ErrorArgs::from_attributes(&attributes)?,
            name: item.ident,
            fields: item.fields,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure_expr = destructure_fields(&self.name, &self.fields);
        let message = match self.error_args.message.as_ref() {
            Some(message) => quote! { (#message).to_string() },
            None => quote_spanned! { self.name.span() => compile_error!("missing `message` tag in `error` attribute") },
        };
        let labels = self.error_args.labels.as_ref().map(|labels| quote! {
            #[allow(unused_variables)]
            fn labels(&self) -> Vec<String> {
                #destructure_expr
                (#labels)
                    .into_iter()
                    .map(|label| label.to_string())
                    .collect()
            }
        });
        let help = self.error_args.help.as_ref().map(|help| quote! {
            #[allow(unused_variables)]
            fn help(&self) -> Option<String> {
                #destructure_expr
                Some((#help).to_string())
            }
        });

        tokens.extend(quote! {
            #[allow(unused_variables)]
            fn message(&self) -> String {
                #destructure_expr
                #message
            }

            #labels
            #help
        });
    }
}
