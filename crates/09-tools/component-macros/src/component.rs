//! 组件注册宏实现

use crate::utils::{parse_type_literal, registration_fn_name, reject_generics};
use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, DeriveInput, Expr,
    ItemStruct, Lit, Meta, Result, Token, Type,
};

/// 组件优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    fn parse_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "high" => Some(Priority::High),
            "normal" => Some(Priority::Normal),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    fn tokens(self) -> proc_macro2::TokenStream {
        match self {
            Priority::High => quote! { ::wireable::PriorityLevel::High },
            Priority::Normal => quote! { ::wireable::PriorityLevel::Normal },
            Priority::Low => quote! { ::wireable::PriorityLevel::Low },
        }
    }
}

/// 组件配置参数
#[derive(Default)]
pub struct ComponentArgs {
    /// 组件优先级
    pub priority: Priority,
    /// 是否为私有组件
    pub private: bool,
    /// 首选实现的能力接口
    pub primary_for: Option<Type>,
    /// 实现的能力接口
    pub implements: Vec<Type>,
    /// 自定义作用域
    pub scope: Option<String>,
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ComponentArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) if path.is_ident("private") => {
                    args.private = true;
                }
                Meta::NameValue(nv) if nv.path.is_ident("priority") => {
                    let name = match &nv.value {
                        Expr::Lit(expr_lit) => match &expr_lit.lit {
                            Lit::Str(lit_str) => lit_str.value(),
                            other => return Err(syn::Error::new_spanned(other, "priority 需要字符串")),
                        },
                        Expr::Path(expr_path) => match expr_path.path.get_ident() {
                            Some(ident) => ident.to_string(),
                            None => return Err(syn::Error::new_spanned(expr_path, "无效的 priority")),
                        },
                        other => return Err(syn::Error::new_spanned(other, "无效的 priority")),
                    };
                    args.priority = Priority::parse_name(&name).ok_or_else(|| {
                        syn::Error::new_spanned(&nv.value, "priority 只能是 high、normal 或 low")
                    })?;
                }
                Meta::NameValue(nv) if nv.path.is_ident("primary_for") => {
                    args.primary_for = Some(parse_type_literal(&nv.value)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("implements") => {
                    args.implements.push(parse_type_literal(&nv.value)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("scope") => match &nv.value {
                    Expr::Lit(expr_lit) => match &expr_lit.lit {
                        Lit::Str(lit_str) => args.scope = Some(lit_str.value()),
                        other => return Err(syn::Error::new_spanned(other, "scope 需要字符串")),
                    },
                    other => return Err(syn::Error::new_spanned(other, "scope 需要字符串")),
                },
                other => return Err(syn::Error::new_spanned(other, "未知的 component 参数")),
            }
        }

        Ok(args)
    }
}

impl ComponentArgs {
    /// 生成对 `ComponentDef` 的链式调用
    fn declarations(&self) -> proc_macro2::TokenStream {
        let priority = self.priority.tokens();
        let private = self.private.then(|| quote! { .private() });
        let implements = self.implements.iter().map(|ty| quote! { .implements::<#ty>(|c| c) });
        let primary_for = self.primary_for.as_ref().map(|ty| quote! { .primary_for::<#ty>(|c| c) });

        quote! {
            def.with_priority(#priority)
                #private
                #(#implements)*
                #primary_for
        }
    }
}

/// 实现 #[component] 宏
pub fn component_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let component_args = if args.is_empty() {
        ComponentArgs::default()
    } else {
        match syn::parse::<ComponentArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let input_struct = parse_macro_input!(input as ItemStruct);
    if let Err(e) = reject_generics(&input_struct.ident, &input_struct.generics) {
        return e.to_compile_error().into();
    }

    let registration_code = generate_registration_code(&input_struct, &component_args);

    let expanded = quote! {
        #input_struct

        #registration_code
    };

    TokenStream::from(expanded)
}

/// 生成组件自动注册代码
fn generate_registration_code(input_struct: &ItemStruct, args: &ComponentArgs) -> proc_macro2::TokenStream {
    let struct_name = &input_struct.ident;
    let registration_fn_name = registration_fn_name(struct_name);
    let declarations = args.declarations();
    let scope = match &args.scope {
        Some(scope) => quote! { #scope },
        None => quote! { ::core::module_path!() },
    };

    quote! {
        // 使用 ctor 在程序加载时把组件提交到全局组件目录
        #[ctor::ctor]
        #[allow(non_snake_case)]
        fn #registration_fn_name() {
            ::wireable::catalog::submit(::wireable::catalog::CatalogEntry::new(
                #scope,
                ::core::line!(),
                || ::wireable::ComponentDescriptor::configured::<#struct_name, _>(|def| #declarations),
            ));
        }
    }
}

/// 实现 #[derive(Component)] 宏
pub fn derive_component_impl(input: DeriveInput) -> TokenStream {
    if let Err(e) = reject_generics(&input.ident, &input.generics) {
        return e.to_compile_error().into();
    }

    let struct_name = &input.ident;
    let expanded = quote! {
        impl ::wireable::Component for #struct_name {}
    };

    TokenStream::from(expanded)
}
