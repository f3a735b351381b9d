use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use crate::{
    ast::{
        ast::{DeclarationType, NodeKind, NodeWrapper},
        expressions::StringExpr,
        types::{Parameter, PrototypeNativeAction},
    },
    errors::errors::{Error, ErrorImpl},
    MK_TYPE,
};

use super::type_expr::TypeExpr;

/// The declared type of a binding.
#[derive(Debug, Clone)]
pub enum DeclaredType {
    /// Defer to the inferred type of the bound value
    Untyped,
    Typed(TypeExpr),
}

/// A named binding within a scope. The name is the key it is stored under.
#[derive(Debug, Clone)]
pub struct Variable {
    pub declaration_type: DeclarationType,
    pub declared_type: DeclaredType,
    /// The expression currently bound, typed on demand
    pub value: Rc<NodeWrapper>,
}

/// A lexical frame.
///
/// Scopes borrow their parent, so a child can never outlive the block that
/// opened it. Bindings sit behind a `RefCell` because assigning through a
/// child mutates the ancestor that owns the binding.
#[derive(Debug)]
pub struct Scope<'a> {
    pub parent: Option<&'a Scope<'a>>,
    vars: RefCell<HashMap<String, Variable>>,
    // Bindings of this scope whose values are being typed right now
    resolving: RefCell<HashSet<String>>,
}

impl<'a> Scope<'a> {
    pub fn new(parent: Option<&'a Scope<'a>>) -> Self {
        Scope {
            parent,
            vars: RefCell::new(HashMap::new()),
            resolving: RefCell::new(HashSet::new()),
        }
    }

    /// Opens a child scope of this one.
    pub fn child<'b>(&'b self) -> Scope<'b>
    where
        'a: 'b,
    {
        Scope::new(Some(self))
    }

    /// The root scope every program starts in: `print`, `printl` and `readl`.
    pub fn bootstrap() -> Scope<'static> {
        let scope = Scope::new(None);
        let string_param = || Parameter {
            name: String::from("s"),
            param_type: MK_TYPE!(NodeKind::String),
            default: Some(NodeWrapper::new(StringExpr {
                value: String::new(),
            })),
        };

        for (name, parameters, return_type) in [
            ("printl", vec![string_param()], TypeExpr::void()),
            ("print", vec![string_param()], TypeExpr::void()),
            ("readl", vec![], MK_TYPE!(NodeKind::String)),
        ] {
            scope.vars.borrow_mut().insert(
                String::from(name),
                Variable {
                    declaration_type: DeclarationType::Const,
                    declared_type: DeclaredType::Typed(MK_TYPE!(NodeKind::PrototypeNativeAction)),
                    value: Rc::new(NodeWrapper::new(PrototypeNativeAction {
                        parameters,
                        return_type,
                    })),
                },
            );
        }

        scope
    }

    /// Walks this scope and then each ancestor, ending at the root.
    pub fn iter(&self) -> impl Iterator<Item = &Scope<'a>> {
        std::iter::successors(Some(self), |scope| scope.parent)
    }

    /// Looks up `name`, returning `None` when it is not bound.
    ///
    /// With `search_parents` false only this scope is consulted.
    pub fn find(&self, name: &str, search_parents: bool) -> Option<Variable> {
        for scope in self.iter() {
            if let Some(var) = scope.vars.borrow().get(name) {
                return Some(var.clone());
            }
            if !search_parents {
                break;
            }
        }

        None
    }

    /// Looks up `name`, failing with `VariableNotDeclared` when it is not bound.
    pub fn get(&self, name: &str, search_parents: bool) -> Result<Variable, Error> {
        self.find(name, search_parents).ok_or_else(|| not_declared(name))
    }

    /// Hands the binding for `name` to `resolve`, refusing to re-enter it.
    ///
    /// A binding whose value leads back to itself while `resolve` runs (`x = x * 2`)
    /// fails with `CyclicBinding` instead of recursing. The binding is identified
    /// by the scope that owns it, so an inner binding shadowing an outer one of
    /// the same name is a different binding.
    pub fn resolve_binding<T>(
        &self,
        name: &str,
        resolve: impl FnOnce(Variable) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let (owner, var) = self
            .iter()
            .find_map(|scope| scope.find(name, false).map(|var| (scope, var)))
            .ok_or_else(|| not_declared(name))?;

        if !owner.resolving.borrow_mut().insert(name.to_string()) {
            return Err(Error::new(ErrorImpl::CyclicBinding {
                variable: name.to_string(),
            }));
        }
        let result = resolve(var);
        owner.resolving.borrow_mut().remove(name);

        result
    }

    /// Whether `name` is bound in this exact scope.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.borrow().contains_key(name)
    }

    /// Rebinds `name` to `value`.
    ///
    /// The innermost binding is mutated in place, wherever it lives. Assigning
    /// a name bound nowhere declares it here as an untyped `let`.
    pub fn assign(&self, name: &str, value: NodeWrapper) -> Result<(), Error> {
        for scope in self.iter() {
            let mut vars = scope.vars.borrow_mut();
            if let Some(var) = vars.get_mut(name) {
                return match var.declaration_type {
                    DeclarationType::Let => {
                        var.value = Rc::new(value);
                        Ok(())
                    }
                    DeclarationType::Const => Err(Error::new(ErrorImpl::ConstantReassignment {
                        variable: name.to_string(),
                    })),
                };
            }
        }

        self.declare_let(name, value, DeclaredType::Untyped)
    }

    /// Creates or overwrites the binding for `name` in this scope.
    ///
    /// Shadowing a constant from an outer scope is fine; replacing one that
    /// lives in this scope is not.
    pub fn declare(
        &self,
        name: &str,
        value: NodeWrapper,
        declared_type: DeclaredType,
        declaration_type: DeclarationType,
    ) -> Result<(), Error> {
        let mut vars = self.vars.borrow_mut();
        if let Some(var) = vars.get(name) {
            if var.declaration_type == DeclarationType::Const {
                return Err(Error::new(ErrorImpl::ConstantRedeclaration {
                    variable: name.to_string(),
                }));
            }
        }

        vars.insert(
            name.to_string(),
            Variable {
                declaration_type,
                declared_type,
                value: Rc::new(value),
            },
        );
        Ok(())
    }

    pub fn declare_let(
        &self,
        name: &str,
        value: NodeWrapper,
        declared_type: DeclaredType,
    ) -> Result<(), Error> {
        self.declare(name, value, declared_type, DeclarationType::Let)
    }

    pub fn declare_const(
        &self,
        name: &str,
        value: NodeWrapper,
        declared_type: DeclaredType,
    ) -> Result<(), Error> {
        self.declare(name, value, declared_type, DeclarationType::Const)
    }

    /// Names bound in this exact scope.
    pub fn names(&self) -> Vec<String> {
        self.vars.borrow().keys().cloned().collect()
    }
}

fn not_declared(name: &str) -> Error {
    Error::new(ErrorImpl::VariableNotDeclared {
        variable: name.to_string(),
    })
}
