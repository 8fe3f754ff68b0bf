//! Shape resolution.
//!
//! A discriminant type's *shape* is the finite, ordered set of leaf
//! possibilities an exhaustive switch over it must cover. Enums contribute
//! their variants verbatim; sealed hierarchies are flattened depth-first so
//! that only terminal leaves appear — intermediate sealed nodes are expanded
//! recursively and remembered separately so the decomposer can explain why
//! matching one directly is rejected.
//!
//! Openness propagates upward: a single extensible branch anywhere in the
//! hierarchy makes the whole shape open.

use rustc_hash::FxHashMap;
use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::{Span, TypeDescriptor, TypeId, TypeKind, TypeProvider};

/// Whether a shape's possibility set is statically complete.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Openness {
    /// All possibilities are enumerable at compile time.
    Closed,
    /// Code outside the current compilation visibility may add
    /// possibilities; verdicts are advisory unless configured strict.
    Open,
}

/// The resolved closed shape of one discriminant type.
///
/// Possibility names are unique and keep the order in which resolution
/// discovered them (variant order for enums, depth-first declaration order
/// for sealed hierarchies). Missing-case reports reuse this order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ShapeSet {
    type_id: TypeId,
    openness: Openness,
    possibilities: Vec<String>,
    index: FxHashMap<String, usize>,
    /// Intermediate sealed/enum node name → the leaves it expands to.
    intermediates: FxHashMap<String, Vec<String>>,
}

impl ShapeSet {
    /// Identity of the type this shape was resolved from.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Whether the shape is open or closed.
    pub fn openness(&self) -> Openness {
        self.openness
    }

    /// Shorthand for `openness() == Openness::Open`.
    pub fn is_open(&self) -> bool {
        self.openness == Openness::Open
    }

    /// Number of known possibilities.
    pub fn len(&self) -> usize {
        self.possibilities.len()
    }

    /// Whether no possibilities are known (an extensible root).
    pub fn is_empty(&self) -> bool {
        self.possibilities.is_empty()
    }

    /// All possibility names in shape order.
    pub fn names(&self) -> &[String] {
        &self.possibilities
    }

    /// Name of the possibility at `index`.
    pub fn name(&self, index: usize) -> &str {
        &self.possibilities[index]
    }

    /// Index of a possibility by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// If `name` is an intermediate node of the hierarchy, the leaves it
    /// resolves to.
    pub fn intermediate_leaves(&self, name: &str) -> Option<&[String]> {
        self.intermediates.get(name).map(Vec::as_slice)
    }
}

/// Failure to resolve a type to a closed shape.
///
/// Both variants are fatal for the enclosing switch's analysis: no shape is
/// produced and nothing is cached.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ShapeError {
    /// The sealing relation contains a cycle.
    CyclicHierarchy {
        /// Name of the type whose resolution detected the cycle.
        type_name: String,
        /// The cycle as a name path, first element repeated at the end.
        cycle: Vec<String>,
    },
    /// The type is an unbounded domain or has no closed metadata visible;
    /// an exhaustiveness marker on it is a configuration error.
    NotExhaustible {
        /// Name (or formatted identity) of the offending type.
        type_name: String,
    },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::CyclicHierarchy { type_name, cycle } => {
                write!(
                    f,
                    "cyclic sealed hierarchy for `{type_name}`: {}",
                    cycle.join(" -> ")
                )
            }
            ShapeError::NotExhaustible { type_name } => {
                write!(f, "`{type_name}` is not exhaustible")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

impl ShapeError {
    /// Convert to a diagnostic anchored at the switch statement.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        match self {
            ShapeError::CyclicHierarchy { type_name, cycle } => {
                Diagnostic::error(ErrorCode::E3004)
                    .with_message(format!("cyclic sealed hierarchy for `{type_name}`"))
                    .with_label(span, "cannot resolve the discriminant's possibilities")
                    .with_note(format!("sealing cycle: {}", cycle.join(" -> ")))
            }
            ShapeError::NotExhaustible { type_name } => Diagnostic::error(ErrorCode::E3005)
                .with_message(format!(
                    "`{type_name}` cannot be the discriminant of an exhaustive switch"
                ))
                .with_label(span, "its set of possibilities is not enumerable")
                .with_suggestion(
                    "use an enum or sealed hierarchy as the discriminant, \
                     or remove the exhaustive marker",
                ),
        }
    }
}

/// Accumulates possibilities during the hierarchy walk.
#[derive(Default)]
struct ShapeBuilder {
    possibilities: Vec<String>,
    index: FxHashMap<String, usize>,
    open: bool,
    intermediates: FxHashMap<String, Vec<String>>,
}

impl ShapeBuilder {
    /// Record one leaf possibility. A repeated name (a diamond in the
    /// sealing DAG) keeps its first position.
    fn push_leaf(&mut self, name: &str) {
        if !self.index.contains_key(name) {
            self.index
                .insert(name.to_string(), self.possibilities.len());
            self.possibilities.push(name.to_string());
        }
    }

    fn finish(self, type_id: TypeId) -> ShapeSet {
        ShapeSet {
            type_id,
            openness: if self.open {
                Openness::Open
            } else {
                Openness::Closed
            },
            possibilities: self.possibilities,
            index: self.index,
            intermediates: self.intermediates,
        }
    }
}

/// Resolve a type to its closed shape.
///
/// Descriptors are looked up through `provider` by identity so that the
/// sealing *graph* (including an invalid cyclic one) is representable. A
/// type the provider does not know is treated as lacking closed metadata.
pub fn resolve(root: TypeId, provider: &dyn TypeProvider) -> Result<ShapeSet, ShapeError> {
    let desc = provider
        .descriptor(root)
        .ok_or_else(|| ShapeError::NotExhaustible {
            type_name: root.to_string(),
        })?;

    // An extensible root has no enumerable possibilities at all; the shape
    // is open and empty rather than an error.
    if matches!(desc.kind, TypeKind::Extensible) {
        let builder = ShapeBuilder {
            open: true,
            ..ShapeBuilder::default()
        };
        return Ok(builder.finish(root));
    }

    let mut builder = ShapeBuilder::default();
    let mut path = Vec::new();
    walk(desc, provider, &mut path, &mut builder)?;
    tracing::debug!(
        type_name = %desc.name,
        possibilities = builder.possibilities.len(),
        open = builder.open,
        "shape resolved"
    );
    Ok(builder.finish(root))
}

/// Depth-first expansion of one node of the hierarchy.
///
/// `path` holds the sealed nodes currently being expanded; meeting one of
/// them again is a cycle. A type reachable along two non-overlapping paths
/// (a diamond) is legal and contributes its leaves once.
///
/// Returns the leaf names the subtree denotes, whether or not earlier
/// siblings already placed them in the shape. Interior nodes record that
/// list so a case targeting them can be expanded for the user.
fn walk(
    desc: &TypeDescriptor,
    provider: &dyn TypeProvider,
    path: &mut Vec<(TypeId, String)>,
    builder: &mut ShapeBuilder,
) -> Result<Vec<String>, ShapeError> {
    if let Some(pos) = path.iter().position(|(id, _)| *id == desc.id) {
        let mut cycle: Vec<String> = path[pos..].iter().map(|(_, name)| name.clone()).collect();
        cycle.push(desc.name.clone());
        return Err(ShapeError::CyclicHierarchy {
            type_name: desc.name.clone(),
            cycle,
        });
    }

    let leaves = match &desc.kind {
        TypeKind::Enum { variants } => {
            let mut leaves: Vec<String> = Vec::with_capacity(variants.len());
            for variant in variants {
                builder.push_leaf(variant);
                if !leaves.contains(variant) {
                    leaves.push(variant.clone());
                }
            }
            record_intermediate(builder, &desc.name, &leaves);
            leaves
        }
        TypeKind::Sealed { subtypes } => {
            let mut leaves: Vec<String> = Vec::new();
            path.push((desc.id, desc.name.clone()));
            for &sub in subtypes {
                let child =
                    provider
                        .descriptor(sub)
                        .ok_or_else(|| ShapeError::NotExhaustible {
                            type_name: sub.to_string(),
                        })?;
                for leaf in walk(child, provider, path, builder)? {
                    if !leaves.contains(&leaf) {
                        leaves.push(leaf);
                    }
                }
            }
            path.pop();
            record_intermediate(builder, &desc.name, &leaves);
            leaves
        }
        TypeKind::Leaf => {
            builder.push_leaf(&desc.name);
            vec![desc.name.clone()]
        }
        TypeKind::Extensible => {
            // The branch itself stays matchable by name, but its unknown
            // extensions make the composite shape open.
            builder.push_leaf(&desc.name);
            builder.open = true;
            vec![desc.name.clone()]
        }
        TypeKind::Unbounded => {
            return Err(ShapeError::NotExhaustible {
                type_name: desc.name.clone(),
            });
        }
    };
    Ok(leaves)
}

/// Remember which leaves an interior node expanded to, for diagnostics.
/// A node met again through a diamond keeps its first recording.
fn record_intermediate(builder: &mut ShapeBuilder, name: &str, leaves: &[String]) {
    builder
        .intermediates
        .entry(name.to_string())
        .or_insert_with(|| leaves.to_vec());
}
