use astwriter_ast::{
    BaseSpecifier, CompositeKey, CompositeType, DeclSpecKind, DeclSpecifier, ElaboratedKind,
    EnumScope, Enumerator, EnumerationType, NodeId, SimpleDeclSpec, SimpleType, StorageClass,
};

use super::is_empty_name;
use crate::{Result, WriterVisitor};

fn storage_class_keyword(storage_class: StorageClass) -> Option<&'static str> {
    match storage_class {
        StorageClass::Unspecified => None,
        StorageClass::Typedef => Some("typedef"),
        StorageClass::Extern => Some("extern"),
        StorageClass::Static => Some("static"),
        StorageClass::Auto => Some("auto"),
        StorageClass::Register => Some("register"),
        StorageClass::Mutable => Some("mutable"),
    }
}

fn simple_type_keyword(ty: SimpleType) -> Option<&'static str> {
    let keyword = match ty {
        SimpleType::Unspecified => return None,
        SimpleType::Void => "void",
        SimpleType::Char => "char",
        SimpleType::WChar => "wchar_t",
        SimpleType::Char8 => "char8_t",
        SimpleType::Char16 => "char16_t",
        SimpleType::Char32 => "char32_t",
        SimpleType::Int => "int",
        SimpleType::Float => "float",
        SimpleType::Double => "double",
        SimpleType::Bool => "bool",
        SimpleType::CBool => "_Bool",
        SimpleType::Int128 => "__int128",
        SimpleType::Float128 => "__float128",
        SimpleType::Decimal32 => "_Decimal32",
        SimpleType::Decimal64 => "_Decimal64",
        SimpleType::Decimal128 => "_Decimal128",
        SimpleType::Auto => "auto",
        SimpleType::Typeof => "typeof",
        SimpleType::Decltype => "decltype",
        SimpleType::DecltypeAuto => "decltype(auto)",
    };
    Some(keyword)
}

fn simple_keywords(simple: &SimpleDeclSpec, keywords: &mut Vec<&'static str>) {
    if simple.is_signed {
        keywords.push("signed");
    }
    if simple.is_unsigned {
        keywords.push("unsigned");
    }
    if simple.is_short {
        keywords.push("short");
    }
    if simple.is_long {
        keywords.push("long");
    }
    if simple.is_long_long {
        keywords.push("long long");
    }
    if simple.is_complex {
        keywords.push("_Complex");
    }
    if simple.is_imaginary {
        keywords.push("_Imaginary");
    }
    keywords.extend(simple_type_keyword(simple.ty));
}

impl<'a> WriterVisitor<'a> {
    /// Prints the specifier keywords separated by single spaces, with no
    /// trailing space.
    pub(crate) fn write_decl_specifier(&mut self, id: NodeId, spec: &'a DeclSpecifier) -> Result<()> {
        for attribute in &spec.attributes {
            self.visit(*attribute)?;
            self.scribe.print_space();
        }

        let flags = spec.flags;
        let mut keywords: Vec<&'static str> = Vec::new();
        if flags.is_friend {
            keywords.push("friend");
        }
        keywords.extend(storage_class_keyword(spec.storage_class));
        if flags.is_thread_local {
            keywords.push("thread_local");
        }
        if flags.is_inline {
            keywords.push("inline");
        }
        if flags.is_virtual {
            keywords.push("virtual");
        }
        if flags.is_explicit {
            keywords.push("explicit");
        }
        if flags.is_constexpr {
            keywords.push("constexpr");
        }
        if flags.is_const {
            keywords.push("const");
        }
        if flags.is_volatile {
            keywords.push("volatile");
        }
        if flags.is_restrict {
            keywords.push("restrict");
        }

        if let DeclSpecKind::Simple(simple) = &spec.kind {
            simple_keywords(simple, &mut keywords);
            self.print_keywords(&keywords);
            if let Some(operand) = simple.declared_type {
                self.scribe.print_char('(');
                self.visit(operand)?;
                self.scribe.print_char(')');
            }
            self.write_trailing_comments(id, false);
            return Ok(());
        }

        self.print_keywords(&keywords);
        if !keywords.is_empty() {
            self.scribe.print_space();
        }
        match &spec.kind {
            DeclSpecKind::Simple(_) => {}
            DeclSpecKind::Named { name, typename } => {
                if *typename {
                    self.scribe.print("typename ");
                }
                self.visit(*name)?;
            }
            DeclSpecKind::Elaborated { kind, name } => {
                self.scribe.print(match kind {
                    ElaboratedKind::Enum => "enum ",
                    ElaboratedKind::Struct => "struct ",
                    ElaboratedKind::Union => "union ",
                    ElaboratedKind::Class => "class ",
                });
                self.visit(*name)?;
            }
            DeclSpecKind::Composite(composite) => self.write_composite(id, composite)?,
            DeclSpecKind::Enumeration(enumeration) => self.write_enumeration(enumeration)?,
        }
        self.write_trailing_comments(id, false);
        Ok(())
    }

    fn print_keywords(&mut self, keywords: &[&str]) {
        for (index, keyword) in keywords.iter().enumerate() {
            if index > 0 {
                self.scribe.print_space();
            }
            self.scribe.print(keyword);
        }
    }

    fn write_composite(&mut self, id: NodeId, composite: &'a CompositeType) -> Result<()> {
        self.scribe.print(match composite.key {
            CompositeKey::Struct => "struct",
            CompositeKey::Union => "union",
            CompositeKey::Class => "class",
        });
        if !is_empty_name(self.ast, composite.name) {
            self.scribe.print_space();
            self.visit(composite.name)?;
        }
        if composite.is_final {
            self.scribe.print(" final");
        }
        if !composite.bases.is_empty() {
            self.scribe.print(" : ");
            self.visit_joined(&composite.bases, ", ")?;
        }
        self.scribe.new_line();
        self.scribe.print_l_brace();
        self.scribe.new_line();
        self.state.suppress_leading_blank_line = true;
        for member in &composite.members {
            self.visit(*member)?;
        }
        self.write_freestanding_comments(id);
        self.scribe.print_r_brace();
        Ok(())
    }

    fn write_enumeration(&mut self, enumeration: &'a EnumerationType) -> Result<()> {
        self.scribe.print("enum");
        if let Some(scope) = enumeration.scope {
            self.scribe.print(match scope {
                EnumScope::Class => " class",
                EnumScope::Struct => " struct",
            });
        }
        if !is_empty_name(self.ast, enumeration.name) {
            self.scribe.print_space();
            self.visit(enumeration.name)?;
        }
        if let Some(base) = enumeration.base_type {
            self.scribe.print(" : ");
            self.visit(base)?;
        }
        if enumeration.is_opaque {
            return Ok(());
        }
        if enumeration.enumerators.is_empty() {
            self.scribe.print(" {}");
            return Ok(());
        }
        self.scribe.print(" { ");
        self.visit_joined(&enumeration.enumerators, ", ")?;
        self.scribe.print(" }");
        Ok(())
    }

    pub(crate) fn write_enumerator(&mut self, enumerator: &'a Enumerator) -> Result<()> {
        self.visit(enumerator.name)?;
        if let Some(value) = enumerator.value {
            self.scribe.print(" = ");
            self.visit(value)?;
        }
        Ok(())
    }

    pub(crate) fn write_base_specifier(&mut self, base: &'a BaseSpecifier) -> Result<()> {
        if let Some(visibility) = base.visibility {
            self.scribe.print(visibility.keyword()).print_space();
        }
        if base.is_virtual {
            self.scribe.print("virtual ");
        }
        self.visit(base.name)?;
        if base.is_pack_expansion {
            self.scribe.print("...");
        }
        Ok(())
    }
}
