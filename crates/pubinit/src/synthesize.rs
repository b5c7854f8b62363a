use crate::prelude::*;
use std::fmt;

///
/// Initializer
///
/// The synthesized constructor: ordered parameters and their matching
/// assignments, produced fresh per invocation and returned to the host.
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initializer {
    pub parameters: Vec<Parameter>,
    pub assignments: Vec<Assignment>,
}

impl Initializer {
    /// Render the full declaration. Always `public`, whatever the enclosing
    /// type's own access level: the generated initializer stays callable
    /// from outside the defining module without elevating the type itself.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.parameters.is_empty() {
            out.push_str("public init() {\n");
        } else {
            out.push_str("public init(\n");
            for (index, parameter) in self.parameters.iter().enumerate() {
                if index > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&format!("    {parameter}"));
            }
            out.push_str("\n) {\n");
        }

        for assignment in &self.assignments {
            out.push_str(&format!("    {assignment}\n"));
        }
        out.push('}');

        out
    }
}

///
/// Parameter
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty_text: String,
    pub default: Option<String>,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty_text)?;
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }

        Ok(())
    }
}

///
/// Assignment
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub qualifier: Qualifier,
    pub name: String,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} = {}", self.qualifier.as_str(), self.name, self.name)
    }
}

/// Build the initializer from the classified member list. Parameter order
/// and assignment order are both declaration order; defaults stay wherever
/// their member was declared.
#[must_use]
pub fn synthesize(members: &[ParticipatingMember]) -> Initializer {
    let parameters = members
        .iter()
        .map(|member| Parameter {
            name: member.name.clone(),
            ty_text: member.ty_text.clone(),
            default: member.default.clone(),
        })
        .collect();

    let assignments = members
        .iter()
        .map(|member| Assignment {
            qualifier: member.qualifier,
            name: member.name.clone(),
        })
        .collect();

    Initializer {
        parameters,
        assignments,
    }
}
