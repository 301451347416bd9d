//! Loader Domain - generated functions handed to a dynamic loader

/// Context label used when the caller gives none
pub const DEFAULT_CONTEXT: &str = "unknown";

/// Request to turn a generated body into a procedure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: String,
    pub context: Option<String>,
}

impl CompileRequest {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            body: body.into(),
            context: None,
        }
    }

    /// Builder: Set parameter names
    pub fn parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: Set context label
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Everything a loader needs to evaluate one generated function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub name: String,
    pub context: String,
    pub parameters: Vec<String>,
    pub body: String,

    /// Complete module text rendered from the function template
    pub source: String,

    /// `kernelgen:<context>:<name>`, for diagnostics
    pub display_name: String,

    /// `kernelgen/<context>/<name>`
    pub source_url: String,
}

/// Module text wrapping a generated body
///
/// ```text
/// "use strict";
/// // this is auto-generated code
/// 	var sqrt = Math.sqrt;
/// 	exports["<name>"] = function <name>(<parameters>) {
/// 		<body>}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionTemplate;

impl FunctionTemplate {
    pub fn render(&self, name: &str, parameters: &[String], body: &str) -> String {
        format!(
            "\"use strict\";\n// this is auto-generated code\n\tvar sqrt = Math.sqrt;\n\texports[\"{name}\"] = function {name}({params}) {{\n\t\t{body}}}",
            name = name,
            params = parameters.join(", "),
            body = body,
        )
    }

    pub fn unit(&self, request: CompileRequest) -> CompilationUnit {
        let context = request
            .context
            .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());
        let source = self.render(&request.name, &request.parameters, &request.body);

        CompilationUnit {
            display_name: format!("kernelgen:{}:{}", context, request.name),
            source_url: format!("kernelgen/{}/{}", context, request.name),
            name: request.name,
            context,
            parameters: request.parameters,
            body: request.body,
            source,
        }
    }
}
