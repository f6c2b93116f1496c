//! 宏工具函数

use proc_macro2::Span;
use syn::{Expr, Generics, Ident, Lit, Result, Type};

/// 生成组件注册函数名称
pub fn registration_fn_name(struct_name: &Ident) -> Ident {
    Ident::new(
        &format!("__wireable_register_{}", struct_name),
        Span::call_site(),
    )
}

/// 把字符串字面量解析为类型，例如 `"dyn Greeter"`
pub fn parse_type_literal(value: &Expr) -> Result<Type> {
    match value {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Str(lit_str) => lit_str.parse::<Type>(),
            other => Err(syn::Error::new_spanned(other, "需要类型字符串，例如 \"dyn Greeter\"")),
        },
        other => Err(syn::Error::new_spanned(other, "需要类型字符串，例如 \"dyn Greeter\"")),
    }
}

/// 组件必须是具体类型
pub fn reject_generics(ident: &Ident, generics: &Generics) -> Result<()> {
    if generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            generics,
            format!("组件 {} 不能带有泛型参数", ident),
        ))
    }
}
