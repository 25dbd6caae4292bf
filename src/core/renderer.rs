use crate::core::{AccessorPair, ConfigProvider, Property};

pub const DEFAULT_INDENT: usize = 2;

/// Separator between a getter and its setter, and between consecutive pairs.
pub const PAIR_SEPARATOR: &str = "\n\n";

/// Renders `get`/`set` accessors that delegate to the model's generic
/// `get<T>(key)` and `set(key, value)` primitives.
#[derive(Debug, Clone)]
pub struct AccessorRenderer {
    indent: String,
}

impl Default for AccessorRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl AccessorRenderer {
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent: " ".repeat(indent_width),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.indent_width())
    }

    pub fn getter(&self, property: &Property) -> String {
        let Property { name, r#type: ty } = property;
        let member = &self.indent;
        let body = self.indent.repeat(2);

        format!(
            "{member}public get {name}(): {ty} {{\n\
             {body}return this.get<{ty}>('{name}');\n\
             {member}}}",
        )
    }

    pub fn setter(&self, property: &Property) -> String {
        let Property { name, r#type: ty } = property;
        let member = &self.indent;
        let body = self.indent.repeat(2);

        format!(
            "{member}public set {name}(value: {ty}) {{\n\
             {body}this.set('{name}', value);\n\
             {member}}}",
        )
    }

    pub fn render(&self, property: &Property) -> AccessorPair {
        AccessorPair {
            getter: self.getter(property),
            setter: self.setter(property),
        }
    }

    /// The insertion batch for a list of properties: each getter and setter
    /// as its own fragment with separators in between, nothing trailing.
    pub fn fragments(&self, properties: &[Property]) -> Vec<String> {
        let mut fragments = Vec::with_capacity(properties.len() * 4);

        for (i, property) in properties.iter().enumerate() {
            let pair = self.render(property);
            fragments.push(pair.getter);
            fragments.push(PAIR_SEPARATOR.to_string());
            fragments.push(pair.setter);

            if i < properties.len() - 1 {
                fragments.push(PAIR_SEPARATOR.to_string());
            }
        }

        fragments
    }

    pub fn render_block(&self, properties: &[Property]) -> String {
        self.fragments(properties).concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getter_template() {
        let getter = AccessorRenderer::default().getter(&Property::new("id", "number"));

        assert_eq!(
            getter,
            "  public get id(): number {\n    return this.get<number>('id');\n  }"
        );
    }

    #[test]
    fn test_setter_template() {
        let setter = AccessorRenderer::default().setter(&Property::new("id", "number"));

        assert_eq!(
            setter,
            "  public set id(value: number) {\n    this.set('id', value);\n  }"
        );
    }

    #[test]
    fn test_signatures_keep_raw_type_text() {
        let property = Property::new("lookup", "Map<string, Array<number | null>>");
        let pair = AccessorRenderer::default().render(&property);

        assert!(pair
            .getter
            .contains("get lookup(): Map<string, Array<number | null>>"));
        assert!(pair
            .setter
            .contains("set lookup(value: Map<string, Array<number | null>>)"));
    }

    #[test]
    fn test_block_layout() {
        let properties = vec![Property::new("id", "number"), Property::new("name", "string")];
        let block = AccessorRenderer::default().render_block(&properties);

        let expected = "  public get id(): number {\n\
                        \x20   return this.get<number>('id');\n\
                        \x20 }\n\
                        \n\
                        \x20 public set id(value: number) {\n\
                        \x20   this.set('id', value);\n\
                        \x20 }\n\
                        \n\
                        \x20 public get name(): string {\n\
                        \x20   return this.get<string>('name');\n\
                        \x20 }\n\
                        \n\
                        \x20 public set name(value: string) {\n\
                        \x20   this.set('name', value);\n\
                        \x20 }";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_fragments_have_no_trailing_separator() {
        let renderer = AccessorRenderer::default();

        assert!(renderer.fragments(&[]).is_empty());

        let single = renderer.fragments(&[Property::new("id", "number")]);
        assert_eq!(single.len(), 3);
        assert_eq!(single[1], PAIR_SEPARATOR);

        let double = renderer.fragments(&[Property::new("a", "A"), Property::new("b", "B")]);
        assert_eq!(double.len(), 7);
        assert_ne!(double.last().map(String::as_str), Some(PAIR_SEPARATOR));
    }

    #[test]
    fn test_custom_indent() {
        let getter = AccessorRenderer::new(4).getter(&Property::new("id", "number"));
        assert!(getter.starts_with("    public get id"));
        assert!(getter.contains("\n        return this.get<number>('id');\n    }"));

        let flat = AccessorRenderer::new(0).setter(&Property::new("id", "number"));
        assert_eq!(flat, "public set id(value: number) {\nthis.set('id', value);\n}");
    }
}
