//! Recursive-descent parser from scanner tokens to a [`KeyShape`].

use smol_str::SmolStr;
use tracing::trace;

use super::scanner::{KeyScanner, Token};
use super::shape::{
    ClassTypeKey, FieldKey, KeyShape, MethodKey, TypeName, TypeParamKey, TypeSegment, WildcardKind,
};
use crate::base::{CompoundName, PrimitiveKind};

/// Deepest signature nesting a key may have.
pub const MAX_NESTING: usize = 256;

/// Parses one key. Any grammar violation gives `None`, as does nesting
/// deeper than [`MAX_NESTING`].
pub struct KeyParser<'a> {
    scanner: KeyScanner<'a>,
    token: Token,
    depth: usize,
}

impl<'a> KeyParser<'a> {
    pub fn new(key: &'a str) -> Self {
        let mut scanner = KeyScanner::new(key);
        let token = scanner.next_token();
        Self {
            scanner,
            token,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> Option<KeyShape> {
        let shape = self.parse_key()?;
        (self.token == Token::End).then_some(shape)
    }

    fn bump(&mut self) {
        self.token = self.scanner.next_token();
    }

    fn text(&self) -> &'a str {
        self.scanner.text()
    }

    fn expect(&mut self, token: Token) -> Option<()> {
        if self.token != token {
            return None;
        }
        self.bump();
        Some(())
    }

    fn parse_key(&mut self) -> Option<KeyShape> {
        match self.token {
            Token::Package => {
                let name = split(self.text(), '/');
                self.bump();
                Some(KeyShape::Package(name))
            }
            Token::Module => {
                let name = split(self.text(), '.');
                self.bump();
                Some(KeyShape::Module(name))
            }
            Token::Type => {
                let class = self.parse_class_type()?;
                self.parse_class_suffix(class)
            }
            Token::BaseType | Token::Array => self.parse_signature(),
            _ => None,
        }
    }

    fn parse_class_suffix(&mut self, class: ClassTypeKey) -> Option<KeyShape> {
        match self.token {
            Token::End => Some(KeyShape::Class(class)),
            Token::Field => {
                let field = self.parse_field(class)?;
                self.parse_annotation_suffix(KeyShape::Field(field))
            }
            Token::Method => {
                let method = KeyShape::Method(self.parse_method(class)?);
                match self.token {
                    Token::LocalVariable => self.parse_local_variable(method),
                    Token::TypeVariableOf => self.parse_type_variable_of(method),
                    _ => self.parse_annotation_suffix(method),
                }
            }
            Token::Initializer => {
                let ordinal = self.scanner.ordinal()?;
                self.bump();
                let initializer = KeyShape::Initializer {
                    declaring: class,
                    ordinal,
                };
                match self.token {
                    Token::LocalVariable => self.parse_local_variable(initializer),
                    _ => Some(initializer),
                }
            }
            Token::TypeVariableOf => self.parse_type_variable_of(KeyShape::Class(class)),
            Token::Annotation => self.parse_annotation_suffix(KeyShape::Class(class)),
            _ => None,
        }
    }

    fn parse_annotation_suffix(&mut self, annotated: KeyShape) -> Option<KeyShape> {
        if self.token != Token::Annotation {
            return Some(annotated);
        }
        self.bump();
        if self.token != Token::Type {
            return None;
        }
        let annotation = self.parse_class_type()?;
        Some(KeyShape::Annotation {
            annotated: Box::new(annotated),
            annotation,
        })
    }

    fn parse_type_variable_of(&mut self, declaring: KeyShape) -> Option<KeyShape> {
        self.expect(Token::TypeVariableOf)?;
        if self.token != Token::TypeVariable {
            return None;
        }
        let name = SmolStr::new(self.text());
        self.bump();
        Some(KeyShape::TypeVariable {
            declaring: Some(Box::new(declaring)),
            name,
        })
    }

    fn parse_local_variable(&mut self, declaring: KeyShape) -> Option<KeyShape> {
        if self.token != Token::LocalVariable {
            return None;
        }
        let name = SmolStr::new(self.text());
        self.bump();
        let occurrence = if self.token == Token::Occurrence {
            let occurrence = self.scanner.ordinal()?;
            self.bump();
            Some(occurrence)
        } else {
            None
        };
        Some(KeyShape::LocalVariable {
            declaring: Box::new(declaring),
            name,
            occurrence,
        })
    }

    fn parse_signature(&mut self) -> Option<KeyShape> {
        if self.depth >= MAX_NESTING {
            trace!("[KEY] nesting deeper than {MAX_NESTING}");
            return None;
        }
        self.depth += 1;
        let shape = self.parse_nested_signature();
        self.depth -= 1;
        shape
    }

    fn parse_nested_signature(&mut self) -> Option<KeyShape> {
        match self.token {
            Token::BaseType => {
                let primitive = self.text().chars().next().and_then(PrimitiveKind::from_key_char)?;
                self.bump();
                Some(KeyShape::Base(primitive))
            }
            Token::Array => {
                let dimensions = u32::try_from(self.text().len()).ok()?;
                self.bump();
                let element = self.parse_signature()?;
                Some(KeyShape::Array {
                    element: Box::new(element),
                    dimensions,
                })
            }
            Token::Type => self.parse_class_type().map(KeyShape::Class),
            Token::TypeVariable => {
                let name = SmolStr::new(self.text());
                self.bump();
                Some(KeyShape::TypeVariable {
                    declaring: None,
                    name,
                })
            }
            Token::Wildcard => {
                let kind = self.text().chars().next().and_then(WildcardKind::from_key_char)?;
                self.bump();
                let bound = match kind {
                    WildcardKind::Unbounded => None,
                    WildcardKind::Extends | WildcardKind::Super => {
                        Some(Box::new(self.parse_signature()?))
                    }
                };
                Some(KeyShape::Wildcard { kind, bound })
            }
            _ => None,
        }
    }

    fn parse_class_type(&mut self) -> Option<ClassTypeKey> {
        let mut package = split(self.text(), '/');
        let top = package.pop()?;
        let mut class = ClassTypeKey {
            package,
            segments: vec![TypeSegment::named(top)],
        };
        self.bump();
        loop {
            match self.token {
                Token::MemberType => {
                    class.segments.push(TypeSegment {
                        name: TypeName::parse(self.text())?,
                        arguments: None,
                    });
                    self.bump();
                }
                Token::TypeArgsStart => {
                    self.bump();
                    let mut arguments = Vec::new();
                    while self.token != Token::TypeArgsEnd {
                        arguments.push(self.parse_signature()?);
                    }
                    self.bump();
                    let segment = class.last_mut()?;
                    if segment.arguments.is_some() {
                        return None;
                    }
                    segment.arguments = Some(arguments);
                }
                Token::TypeEnd => {
                    self.bump();
                    return Some(class);
                }
                _ => return None,
            }
        }
    }

    fn parse_field(&mut self, declaring: ClassTypeKey) -> Option<FieldKey> {
        let name = SmolStr::new(self.text());
        self.bump();
        let ty = self.parse_signature()?;
        Some(FieldKey {
            declaring,
            name,
            ty: Box::new(ty),
        })
    }

    fn parse_method(&mut self, declaring: ClassTypeKey) -> Option<MethodKey> {
        let name = SmolStr::new(self.text());
        self.bump();

        let mut type_parameters = Vec::new();
        if self.token == Token::TypeParamsStart {
            self.bump();
            while self.token == Token::TypeParameter {
                type_parameters.push(self.parse_type_parameter()?);
            }
            if type_parameters.is_empty() {
                return None;
            }
            self.expect(Token::TypeParamsEnd)?;
        }

        self.expect(Token::ParamsStart)?;
        let mut parameters = Vec::new();
        while self.token != Token::ParamsEnd {
            parameters.push(self.parse_signature()?);
        }
        self.bump();
        let return_type = self.parse_signature()?;

        let mut thrown = Vec::new();
        while self.token == Token::Thrown {
            self.bump();
            thrown.push(self.parse_signature()?);
        }

        Some(MethodKey {
            declaring,
            name,
            type_parameters,
            parameters,
            return_type: Box::new(return_type),
            thrown,
        })
    }

    fn parse_type_parameter(&mut self) -> Option<TypeParamKey> {
        let name = SmolStr::new(self.text());
        self.bump();
        let class_bound = match self.token {
            Token::Type | Token::TypeVariable | Token::Array => {
                Some(Box::new(self.parse_signature()?))
            }
            _ => None,
        };
        let mut interface_bounds = Vec::new();
        while self.token == Token::Bound {
            self.bump();
            interface_bounds.push(self.parse_signature()?);
        }
        Some(TypeParamKey {
            name,
            class_bound,
            interface_bounds,
        })
    }
}

fn split(text: &str, separator: char) -> CompoundName {
    text.split(separator).map(SmolStr::new).collect()
}
