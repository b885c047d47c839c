//! Declarations that comments are attached to
//!
//! The compiler's declaration nodes are far richer than anything a comment needs. This
//! module models just the parts that [`DeclInfo`](super::decl_info::DeclInfo) looks at:
//! what sort of entity it is, its parameters and result type, and its template parameter
//! lists. The parameter lists here are what `\param` and `\tparam` names are resolved
//! against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type as spelled in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QualType(String);

impl QualType {
    /// Wrap a spelling such as `"const char *"`. It is not parsed or normalized.
    pub fn new(spelling: impl Into<String>) -> Self {
        Self(spelling.into())
    }

    /// The spelling passed to [`new`](Self::new).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A function parameter. Unnamed parameters have an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParmVarDecl {
    pub name: String,
    pub ty: QualType,
}

impl ParmVarDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: QualType::new(ty),
        }
    }
}

/// One entry of a template parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateParameter {
    /// `typename T`
    Type { name: String },
    /// `int N`
    NonType { name: String, ty: QualType },
    /// `template<...> class TT`
    TemplateTemplate {
        name: String,
        parameters: TemplateParameterList,
    },
}

impl TemplateParameter {
    pub fn name(&self) -> &str {
        match self {
            TemplateParameter::Type { name }
            | TemplateParameter::NonType { name, .. }
            | TemplateParameter::TemplateTemplate { name, .. } => name.as_str(),
        }
    }

    /// The nested list of a template template parameter.
    pub fn nested(&self) -> Option<&TemplateParameterList> {
        match self {
            TemplateParameter::TemplateTemplate { parameters, .. } => Some(parameters),
            _ => None,
        }
    }
}

/// `template<...>`, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateParameterList {
    parameters: Vec<TemplateParameter>,
}

impl TemplateParameterList {
    pub fn new(parameters: Vec<TemplateParameter>) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &[TemplateParameter] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Path of indices leading to the parameter called `name`, searching nested template
    /// template parameter lists depth first. The first match wins.
    pub fn position_of(&self, name: &str) -> Option<Vec<usize>> {
        let mut position = Vec::new();
        self.find(name, &mut position).then_some(position)
    }

    fn find(&self, name: &str, position: &mut Vec<usize>) -> bool {
        for (index, parameter) in self.parameters.iter().enumerate() {
            position.push(index);
            if parameter.name() == name {
                return true;
            }
            if let Some(nested) = parameter.nested() {
                if nested.find(name, position) {
                    return true;
                }
            }
            position.pop();
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    Instance,
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<ParmVarDecl>,
    pub result: QualType,
    /// Outer template parameter lists of an out-of-line member or explicit specialization.
    pub template_parameter_lists: Vec<TemplateParameterList>,
    /// Set for member functions.
    pub method: Option<MethodKind>,
}

impl FunctionDecl {
    /// A free function. Use the struct fields for templates and methods.
    pub fn new(
        name: impl Into<String>,
        params: Vec<ParmVarDecl>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            result: QualType::new(result),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: MethodKind) -> Self {
        self.method = Some(method);
        self
    }

    /// Add an outer list, outermost first.
    pub fn with_template_parameter_list(mut self, list: TemplateParameterList) -> Self {
        self.template_parameter_lists.push(list);
        self
    }

    /// Index of the parameter called `name`.
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|param| param.name == name)
    }
}

/// The written type of a typedef, layer by layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeLoc {
    Named(QualType),
    Paren(Box<TypeLoc>),
    Qualified(Box<TypeLoc>),
    Pointer(Box<TypeLoc>),
    BlockPointer(Box<TypeLoc>),
    MemberPointer(Box<TypeLoc>),
    Function {
        params: Vec<ParmVarDecl>,
        result: QualType,
    },
}

impl TypeLoc {
    /// The function type under any parens, qualifiers and pointers.
    pub fn pointee_function(&self) -> Option<(&[ParmVarDecl], &QualType)> {
        let mut current = self;
        loop {
            match current {
                TypeLoc::Paren(inner)
                | TypeLoc::Qualified(inner)
                | TypeLoc::Pointer(inner)
                | TypeLoc::BlockPointer(inner)
                | TypeLoc::MemberPointer(inner) => current = inner.as_ref(),
                TypeLoc::Function { params, result } => return Some((params.as_slice(), result)),
                TypeLoc::Named(_) => return None,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decl {
    Function(FunctionDecl),
    CxxMethod(FunctionDecl),
    Constructor(FunctionDecl),
    Destructor(FunctionDecl),
    Conversion(FunctionDecl),
    ObjCMethod {
        function: FunctionDecl,
        is_instance: bool,
    },
    FunctionTemplate {
        templated: FunctionDecl,
        parameters: TemplateParameterList,
    },
    Record {
        name: String,
    },
    ClassTemplate {
        name: String,
        parameters: TemplateParameterList,
    },
    ClassTemplateSpecialization {
        name: String,
    },
    ClassTemplatePartialSpecialization {
        name: String,
        parameters: TemplateParameterList,
    },
    Var {
        name: String,
        ty: QualType,
    },
    Field {
        name: String,
        ty: QualType,
    },
    EnumConstant {
        name: String,
    },
    ObjCIvar {
        name: String,
        ty: QualType,
    },
    Namespace {
        name: String,
    },
    Typedef {
        name: String,
        underlying: TypeLoc,
    },
    TypeAlias {
        name: String,
        underlying: TypeLoc,
    },
    TypeAliasTemplate {
        name: String,
        parameters: TemplateParameterList,
    },
    Enum {
        name: String,
    },
    Other {
        name: String,
    },
}

impl Decl {
    /// Name of the declared entity, or of the templated function for a function template.
    pub fn name(&self) -> &str {
        match self {
            Decl::Function(function)
            | Decl::CxxMethod(function)
            | Decl::Constructor(function)
            | Decl::Destructor(function)
            | Decl::Conversion(function)
            | Decl::ObjCMethod { function, .. }
            | Decl::FunctionTemplate {
                templated: function,
                ..
            } => function.name.as_str(),
            Decl::Record { name }
            | Decl::ClassTemplate { name, .. }
            | Decl::ClassTemplateSpecialization { name }
            | Decl::ClassTemplatePartialSpecialization { name, .. }
            | Decl::Var { name, .. }
            | Decl::Field { name, .. }
            | Decl::EnumConstant { name }
            | Decl::ObjCIvar { name, .. }
            | Decl::Namespace { name }
            | Decl::Typedef { name, .. }
            | Decl::TypeAlias { name, .. }
            | Decl::TypeAliasTemplate { name, .. }
            | Decl::Enum { name }
            | Decl::Other { name } => name.as_str(),
        }
    }

    /// Name of the declaration's node class, for logs and dumps.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Decl::Function(_) => "Function",
            Decl::CxxMethod(_) => "CXXMethod",
            Decl::Constructor(_) => "CXXConstructor",
            Decl::Destructor(_) => "CXXDestructor",
            Decl::Conversion(_) => "CXXConversion",
            Decl::ObjCMethod { .. } => "ObjCMethod",
            Decl::FunctionTemplate { .. } => "FunctionTemplate",
            Decl::Record { .. } => "Record",
            Decl::ClassTemplate { .. } => "ClassTemplate",
            Decl::ClassTemplateSpecialization { .. } => "ClassTemplateSpecialization",
            Decl::ClassTemplatePartialSpecialization { .. } => {
                "ClassTemplatePartialSpecialization"
            }
            Decl::Var { .. } => "Var",
            Decl::Field { .. } => "Field",
            Decl::EnumConstant { .. } => "EnumConstant",
            Decl::ObjCIvar { .. } => "ObjCIvar",
            Decl::Namespace { .. } => "Namespace",
            Decl::Typedef { .. } => "Typedef",
            Decl::TypeAlias { .. } => "TypeAlias",
            Decl::TypeAliasTemplate { .. } => "TypeAliasTemplate",
            Decl::Enum { .. } => "Enum",
            Decl::Other { .. } => "Other",
        }
    }
}
