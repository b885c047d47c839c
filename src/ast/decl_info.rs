//! Declaration summary for documentation rendering
//!
//! [`DeclInfo`] classifies the declaration a comment is attached to in the few terms a
//! renderer cares about: is it a function (and which parameters can `\param` refer to), a
//! template (and which parameters can `\tparam` refer to), a class, a typedef, and so on.
//!
//! The classification is computed from the declaration alone, the first time anything asks
//! for it, and is never recomputed. Every accessor goes through the fill, so there is no way
//! to observe an unfilled field.

use super::decl::{Decl, FunctionDecl, MethodKind, ParmVarDecl, QualType, TemplateParameterList};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A simplified description of the declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeclKind {
    /// Everything not listed below.
    #[default]
    Other,
    /// Functions, methods, function templates, and typedefs of function types.
    Function,
    /// Classes, structs, unions and their templates and specializations.
    Class,
    /// Variables, fields, enumerators and instance variables.
    Variable,
    Namespace,
    /// Typedefs and type aliases, including alias templates.
    Typedef,
    Enum,
}

impl DeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclKind::Other => "other",
            DeclKind::Function => "function",
            DeclKind::Class => "class",
            DeclKind::Variable => "variable",
            DeclKind::Namespace => "namespace",
            DeclKind::Typedef => "typedef",
            DeclKind::Enum => "enum",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the declaration relates to templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemplateDeclKind {
    #[default]
    NotTemplate,
    Template,
    TemplateSpecialization,
    TemplatePartialSpecialization,
}

impl TemplateDeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateDeclKind::NotTemplate => "not-template",
            TemplateDeclKind::Template => "template",
            TemplateDeclKind::TemplateSpecialization => "specialization",
            TemplateDeclKind::TemplatePartialSpecialization => "partial-specialization",
        }
    }
}

/// The computed classification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeclSummary<'a> {
    pub kind: DeclKind,
    pub template_kind: TemplateDeclKind,
    pub is_objc_method: bool,
    /// Only ever true for [`DeclKind::Function`].
    pub is_instance_method: bool,
    /// Only ever true for [`DeclKind::Function`].
    pub is_class_method: bool,
    pub param_vars: &'a [ParmVarDecl],
    pub result_type: Option<&'a QualType>,
    pub template_parameters: Option<&'a TemplateParameterList>,
}

impl<'a> DeclSummary<'a> {
    /// Classify `decl`.
    pub fn of(decl: &'a Decl) -> Self {
        let mut summary = DeclSummary::default();
        match decl {
            Decl::Function(function) => summary.set_function(function),
            Decl::CxxMethod(function)
            | Decl::Constructor(function)
            | Decl::Destructor(function)
            | Decl::Conversion(function) => {
                summary.set_function(function);
                let instance = function.method != Some(MethodKind::Static);
                summary.is_instance_method = instance;
                summary.is_class_method = !instance;
            }
            Decl::ObjCMethod {
                function,
                is_instance,
            } => {
                summary.kind = DeclKind::Function;
                summary.param_vars = &function.params;
                summary.result_type = Some(&function.result);
                summary.is_objc_method = true;
                summary.is_instance_method = *is_instance;
                summary.is_class_method = !*is_instance;
            }
            Decl::FunctionTemplate {
                templated,
                parameters,
            } => {
                summary.kind = DeclKind::Function;
                summary.template_kind = TemplateDeclKind::Template;
                summary.param_vars = &templated.params;
                summary.result_type = Some(&templated.result);
                summary.template_parameters = Some(parameters);
            }
            Decl::ClassTemplate { parameters, .. } => {
                summary.kind = DeclKind::Class;
                summary.template_kind = TemplateDeclKind::Template;
                summary.template_parameters = Some(parameters);
            }
            Decl::ClassTemplatePartialSpecialization { parameters, .. } => {
                summary.kind = DeclKind::Class;
                summary.template_kind = TemplateDeclKind::TemplatePartialSpecialization;
                summary.template_parameters = Some(parameters);
            }
            Decl::ClassTemplateSpecialization { .. } => {
                summary.kind = DeclKind::Class;
                summary.template_kind = TemplateDeclKind::TemplateSpecialization;
            }
            Decl::Record { .. } => summary.kind = DeclKind::Class,
            Decl::Var { .. }
            | Decl::Field { .. }
            | Decl::EnumConstant { .. }
            | Decl::ObjCIvar { .. } => summary.kind = DeclKind::Variable,
            Decl::Namespace { .. } => summary.kind = DeclKind::Namespace,
            Decl::Typedef { underlying, .. } => {
                summary.kind = DeclKind::Typedef;
                // A typedef of a function type (or a pointer to one) documents parameters.
                if let Some((params, result)) = underlying.pointee_function() {
                    summary.kind = DeclKind::Function;
                    summary.param_vars = params;
                    summary.result_type = Some(result);
                }
            }
            Decl::TypeAlias { .. } => summary.kind = DeclKind::Typedef,
            Decl::TypeAliasTemplate { parameters, .. } => {
                summary.kind = DeclKind::Typedef;
                summary.template_kind = TemplateDeclKind::Template;
                summary.template_parameters = Some(parameters);
            }
            Decl::Enum { .. } => summary.kind = DeclKind::Enum,
            Decl::Other { .. } => {}
        }
        summary
    }

    fn set_function(&mut self, function: &'a FunctionDecl) {
        self.kind = DeclKind::Function;
        self.param_vars = &function.params;
        self.result_type = Some(&function.result);
        if let Some(last) = function.template_parameter_lists.last() {
            self.template_kind = TemplateDeclKind::TemplateSpecialization;
            self.template_parameters = Some(last);
        }
    }
}

/// Lazily filled summary of the declaration a comment documents.
#[derive(Debug)]
pub struct DeclInfo<'a> {
    decl: &'a Decl,
    summary: OnceCell<DeclSummary<'a>>,
}

impl<'a> DeclInfo<'a> {
    pub fn new(decl: &'a Decl) -> Self {
        Self {
            decl,
            summary: OnceCell::new(),
        }
    }

    /// The declaration the comment is attached to.
    pub fn decl(&self) -> &'a Decl {
        self.decl
    }

    /// Whether the summary has been computed yet.
    pub fn is_filled(&self) -> bool {
        self.summary.get().is_some()
    }

    /// The summary, computing it on first call.
    pub fn fill(&self) -> &DeclSummary<'a> {
        self.summary.get_or_init(|| {
            #[cfg(test)]
            super::probe::hit(super::probe::DECL_INFO_FILL);
            let summary = DeclSummary::of(self.decl);
            debug!(
                decl = self.decl.name(),
                decl_kind = self.decl.kind_name(),
                kind = summary.kind.as_str(),
                template_kind = summary.template_kind.as_str(),
                params = summary.param_vars.len(),
                "filled decl info"
            );
            summary
        })
    }

    pub fn kind(&self) -> DeclKind {
        self.fill().kind
    }

    pub fn template_kind(&self) -> TemplateDeclKind {
        self.fill().template_kind
    }

    pub fn is_objc_method(&self) -> bool {
        self.fill().is_objc_method
    }

    pub fn is_instance_method(&self) -> bool {
        self.fill().is_instance_method
    }

    pub fn is_class_method(&self) -> bool {
        self.fill().is_class_method
    }

    pub fn param_vars(&self) -> &'a [ParmVarDecl] {
        self.fill().param_vars
    }

    pub fn result_type(&self) -> Option<&'a QualType> {
        self.fill().result_type
    }

    pub fn template_parameters(&self) -> Option<&'a TemplateParameterList> {
        self.fill().template_parameters
    }
}
