use crate::prelude::*;

///
/// ParticipatingMember
///
/// A stored member that survives classification, with everything the
/// synthesizer needs already resolved: parameter name, rendered type text,
/// carried default, and the qualifier its assignment goes through.
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipatingMember {
    pub name: String,
    pub ty_text: String,
    pub default: Option<String>,
    pub qualifier: Qualifier,
}

///
/// Qualifier
///

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualifier {
    /// Instance storage, assigned through `self`.
    Instance,
    /// Static storage, assigned through the type's own namespace (`Self`).
    Type,
}

impl Qualifier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instance => "self",
            Self::Type => "Self",
        }
    }
}

/// Project the declaration's ordered member list onto the ordered list of
/// members that participate in the synthesized initializer. Pure; order is
/// declaration order throughout.
#[must_use]
pub fn classify(decl: &Declaration) -> Vec<ParticipatingMember> {
    decl.members
        .iter()
        .filter(|member| member.participates())
        .map(classify_member)
        .collect()
}

fn classify_member(member: &Member) -> ParticipatingMember {
    let ty_text = if member.ty.requires_escaping() {
        format!("@escaping {}", member.ty.text)
    } else {
        member.ty.text.clone()
    };

    let qualifier = match member.scope {
        Scope::Instance => Qualifier::Instance,
        Scope::Static => Qualifier::Type,
    };

    ParticipatingMember {
        name: member.name.clone(),
        ty_text,
        default: member.default.clone(),
        qualifier,
    }
}
