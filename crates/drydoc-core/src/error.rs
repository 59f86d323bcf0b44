use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrydocError {
    // Variable section errors
    #[error("VARIABLE_SYNTAX: {0}")]
    VariableSyntax(String),

    // Template section errors
    #[error("TEMPLATE_SYNTAX: {0}")]
    TemplateSyntax(String),

    // Binding merge errors
    #[error("BINDING_TYPE: {0}")]
    BindingType(String),

    // Engine registry errors
    #[error("ENGINE_NOT_FOUND: engine '{0}' is not registered")]
    EngineNotFound(String),

    // Encoding errors
    #[error("ENCODING_UNSUPPORTED: unknown encoding '{0}', only utf-8 is supported")]
    EncodingUnsupported(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DrydocError>;
