//! PHP reserved words.
//!
//! Lookup is case-insensitive (`FUNCTION`, `Function` and `function` are the
//! same keyword). The word is folded into a stack buffer, then matched
//! against the keywords of its length only. Words outside the 2-13 byte
//! range, or that start with a byte no keyword starts with, are rejected
//! before any comparison.
//!
//! Three keywords are operators as well: `new`, `clone` and `instanceof`.
//! The classifier emits those as identifier+operator tokens rather than
//! keyword tokens (see [`Keyword::is_operator_word`]).

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 13;

/// A PHP reserved word. The discriminant is the keyword's numeric code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u32)]
pub enum Keyword {
    // Control flow
    As,
    Break,
    Case,
    Catch,
    Continue,
    Declare,
    Default,
    Do,
    Else,
    Elseif,
    Enddeclare,
    Endfor,
    Endforeach,
    Endif,
    Endswitch,
    Endwhile,
    Finally,
    For,
    Foreach,
    Goto,
    If,
    Return,
    Switch,
    Throw,
    Try,
    While,
    Yield,

    // Declarations
    Abstract,
    Class,
    Const,
    Extends,
    Final,
    Function,
    Global,
    Implements,
    Insteadof,
    Interface,
    Namespace,
    Private,
    Protected,
    Public,
    Static,
    Trait,
    Use,
    Var,

    // Language constructs
    Clone,
    Die,
    Echo,
    Empty,
    Eval,
    Exit,
    Include,
    IncludeOnce,
    Instanceof,
    Isset,
    List,
    New,
    Print,
    Require,
    RequireOnce,

    // Word operators
    And,
    Or,
    Xor,

    // Types (cast targets)
    Array,
    Bool,
    Callable,
    Float,
    Int,
    Object,
    String,
    Unset,

    // Magic constants
    MagicClass,
    MagicDir,
    MagicFile,
    MagicFunction,
    MagicLine,
    MagicMethod,
    MagicNamespace,
    MagicTrait,
}

impl Keyword {
    /// Every keyword, in code order.
    pub const ALL: [Keyword; 79] = [
        Keyword::As,
        Keyword::Break,
        Keyword::Case,
        Keyword::Catch,
        Keyword::Continue,
        Keyword::Declare,
        Keyword::Default,
        Keyword::Do,
        Keyword::Else,
        Keyword::Elseif,
        Keyword::Enddeclare,
        Keyword::Endfor,
        Keyword::Endforeach,
        Keyword::Endif,
        Keyword::Endswitch,
        Keyword::Endwhile,
        Keyword::Finally,
        Keyword::For,
        Keyword::Foreach,
        Keyword::Goto,
        Keyword::If,
        Keyword::Return,
        Keyword::Switch,
        Keyword::Throw,
        Keyword::Try,
        Keyword::While,
        Keyword::Yield,
        Keyword::Abstract,
        Keyword::Class,
        Keyword::Const,
        Keyword::Extends,
        Keyword::Final,
        Keyword::Function,
        Keyword::Global,
        Keyword::Implements,
        Keyword::Insteadof,
        Keyword::Interface,
        Keyword::Namespace,
        Keyword::Private,
        Keyword::Protected,
        Keyword::Public,
        Keyword::Static,
        Keyword::Trait,
        Keyword::Use,
        Keyword::Var,
        Keyword::Clone,
        Keyword::Die,
        Keyword::Echo,
        Keyword::Empty,
        Keyword::Eval,
        Keyword::Exit,
        Keyword::Include,
        Keyword::IncludeOnce,
        Keyword::Instanceof,
        Keyword::Isset,
        Keyword::List,
        Keyword::New,
        Keyword::Print,
        Keyword::Require,
        Keyword::RequireOnce,
        Keyword::And,
        Keyword::Or,
        Keyword::Xor,
        Keyword::Array,
        Keyword::Bool,
        Keyword::Callable,
        Keyword::Float,
        Keyword::Int,
        Keyword::Object,
        Keyword::String,
        Keyword::Unset,
        Keyword::MagicClass,
        Keyword::MagicDir,
        Keyword::MagicFile,
        Keyword::MagicFunction,
        Keyword::MagicLine,
        Keyword::MagicMethod,
        Keyword::MagicNamespace,
        Keyword::MagicTrait,
    ];

    /// Numeric keyword code.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Canonical (lowercase) spelling.
    pub const fn text(self) -> &'static str {
        match self {
            Keyword::As => "as",
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Continue => "continue",
            Keyword::Declare => "declare",
            Keyword::Default => "default",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Elseif => "elseif",
            Keyword::Enddeclare => "enddeclare",
            Keyword::Endfor => "endfor",
            Keyword::Endforeach => "endforeach",
            Keyword::Endif => "endif",
            Keyword::Endswitch => "endswitch",
            Keyword::Endwhile => "endwhile",
            Keyword::Finally => "finally",
            Keyword::For => "for",
            Keyword::Foreach => "foreach",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::Return => "return",
            Keyword::Switch => "switch",
            Keyword::Throw => "throw",
            Keyword::Try => "try",
            Keyword::While => "while",
            Keyword::Yield => "yield",
            Keyword::Abstract => "abstract",
            Keyword::Class => "class",
            Keyword::Const => "const",
            Keyword::Extends => "extends",
            Keyword::Final => "final",
            Keyword::Function => "function",
            Keyword::Global => "global",
            Keyword::Implements => "implements",
            Keyword::Insteadof => "insteadof",
            Keyword::Interface => "interface",
            Keyword::Namespace => "namespace",
            Keyword::Private => "private",
            Keyword::Protected => "protected",
            Keyword::Public => "public",
            Keyword::Static => "static",
            Keyword::Trait => "trait",
            Keyword::Use => "use",
            Keyword::Var => "var",
            Keyword::Clone => "clone",
            Keyword::Die => "die",
            Keyword::Echo => "echo",
            Keyword::Empty => "empty",
            Keyword::Eval => "eval",
            Keyword::Exit => "exit",
            Keyword::Include => "include",
            Keyword::IncludeOnce => "include_once",
            Keyword::Instanceof => "instanceof",
            Keyword::Isset => "isset",
            Keyword::List => "list",
            Keyword::New => "new",
            Keyword::Print => "print",
            Keyword::Require => "require",
            Keyword::RequireOnce => "require_once",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Xor => "xor",
            Keyword::Array => "array",
            Keyword::Bool => "bool",
            Keyword::Callable => "callable",
            Keyword::Float => "float",
            Keyword::Int => "int",
            Keyword::Object => "object",
            Keyword::String => "string",
            Keyword::Unset => "unset",
            Keyword::MagicClass => "__class__",
            Keyword::MagicDir => "__dir__",
            Keyword::MagicFile => "__file__",
            Keyword::MagicFunction => "__function__",
            Keyword::MagicLine => "__line__",
            Keyword::MagicMethod => "__method__",
            Keyword::MagicNamespace => "__namespace__",
            Keyword::MagicTrait => "__trait__",
        }
    }

    /// Keywords that are emitted as identifier+operator tokens.
    #[inline]
    pub const fn is_operator_word(self) -> bool {
        matches!(self, Keyword::New | Keyword::Clone | Keyword::Instanceof)
    }

    /// The merged token text when this keyword appears as `( keyword )`.
    pub const fn cast_text(self) -> Option<&'static str> {
        match self {
            Keyword::Int => Some("(int)"),
            Keyword::Float => Some("(float)"),
            Keyword::Bool => Some("(bool)"),
            Keyword::String => Some("(string)"),
            Keyword::Object => Some("(object)"),
            Keyword::Array => Some("(array)"),
            Keyword::Unset => Some("(unset)"),
            _ => None,
        }
    }
}

/// Look up a PHP keyword, case-insensitively.
///
/// Returns `None` for ordinary identifiers.
pub fn lookup(text: &[u8]) -> Option<Keyword> {
    let len = text.len();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return None;
    }
    let first = text[0];
    if first != b'_' && !first.is_ascii_alphabetic() {
        return None;
    }

    let mut folded = [0u8; MAX_LEN];
    for (dst, src) in folded.iter_mut().zip(text) {
        *dst = src.to_ascii_lowercase();
    }
    let word = &folded[..len];

    match len {
        2 => match word {
            b"as" => Some(Keyword::As),
            b"do" => Some(Keyword::Do),
            b"if" => Some(Keyword::If),
            b"or" => Some(Keyword::Or),
            _ => None,
        },
        3 => match word {
            b"and" => Some(Keyword::And),
            b"die" => Some(Keyword::Die),
            b"for" => Some(Keyword::For),
            b"int" => Some(Keyword::Int),
            b"new" => Some(Keyword::New),
            b"try" => Some(Keyword::Try),
            b"use" => Some(Keyword::Use),
            b"var" => Some(Keyword::Var),
            b"xor" => Some(Keyword::Xor),
            _ => None,
        },
        4 => match word {
            b"bool" => Some(Keyword::Bool),
            b"case" => Some(Keyword::Case),
            b"echo" => Some(Keyword::Echo),
            b"else" => Some(Keyword::Else),
            b"eval" => Some(Keyword::Eval),
            b"exit" => Some(Keyword::Exit),
            b"goto" => Some(Keyword::Goto),
            b"list" => Some(Keyword::List),
            _ => None,
        },
        5 => match word {
            b"array" => Some(Keyword::Array),
            b"break" => Some(Keyword::Break),
            b"catch" => Some(Keyword::Catch),
            b"class" => Some(Keyword::Class),
            b"clone" => Some(Keyword::Clone),
            b"const" => Some(Keyword::Const),
            b"empty" => Some(Keyword::Empty),
            b"endif" => Some(Keyword::Endif),
            b"final" => Some(Keyword::Final),
            b"float" => Some(Keyword::Float),
            b"isset" => Some(Keyword::Isset),
            b"print" => Some(Keyword::Print),
            b"throw" => Some(Keyword::Throw),
            b"trait" => Some(Keyword::Trait),
            b"unset" => Some(Keyword::Unset),
            b"while" => Some(Keyword::While),
            b"yield" => Some(Keyword::Yield),
            _ => None,
        },
        6 => match word {
            b"elseif" => Some(Keyword::Elseif),
            b"endfor" => Some(Keyword::Endfor),
            b"global" => Some(Keyword::Global),
            b"object" => Some(Keyword::Object),
            b"public" => Some(Keyword::Public),
            b"return" => Some(Keyword::Return),
            b"static" => Some(Keyword::Static),
            b"string" => Some(Keyword::String),
            b"switch" => Some(Keyword::Switch),
            _ => None,
        },
        7 => match word {
            b"declare" => Some(Keyword::Declare),
            b"default" => Some(Keyword::Default),
            b"extends" => Some(Keyword::Extends),
            b"finally" => Some(Keyword::Finally),
            b"foreach" => Some(Keyword::Foreach),
            b"include" => Some(Keyword::Include),
            b"private" => Some(Keyword::Private),
            b"require" => Some(Keyword::Require),
            b"__dir__" => Some(Keyword::MagicDir),
            _ => None,
        },
        8 => match word {
            b"abstract" => Some(Keyword::Abstract),
            b"callable" => Some(Keyword::Callable),
            b"continue" => Some(Keyword::Continue),
            b"endwhile" => Some(Keyword::Endwhile),
            b"function" => Some(Keyword::Function),
            b"__file__" => Some(Keyword::MagicFile),
            b"__line__" => Some(Keyword::MagicLine),
            _ => None,
        },
        9 => match word {
            b"endswitch" => Some(Keyword::Endswitch),
            b"insteadof" => Some(Keyword::Insteadof),
            b"interface" => Some(Keyword::Interface),
            b"namespace" => Some(Keyword::Namespace),
            b"protected" => Some(Keyword::Protected),
            b"__class__" => Some(Keyword::MagicClass),
            b"__trait__" => Some(Keyword::MagicTrait),
            _ => None,
        },
        10 => match word {
            b"enddeclare" => Some(Keyword::Enddeclare),
            b"endforeach" => Some(Keyword::Endforeach),
            b"implements" => Some(Keyword::Implements),
            b"instanceof" => Some(Keyword::Instanceof),
            b"__method__" => Some(Keyword::MagicMethod),
            _ => None,
        },
        12 => match word {
            b"include_once" => Some(Keyword::IncludeOnce),
            b"require_once" => Some(Keyword::RequireOnce),
            b"__function__" => Some(Keyword::MagicFunction),
            _ => None,
        },
        13 => match word {
            b"__namespace__" => Some(Keyword::MagicNamespace),
            _ => None,
        },
        _ => None,
    }
}
