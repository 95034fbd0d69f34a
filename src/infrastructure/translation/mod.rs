mod openai_translator;
mod scaffold_translator;
mod translator_factory;

pub use openai_translator::OpenAiTranslator;
pub use scaffold_translator::ScaffoldTranslator;
pub use translator_factory::TranslatorFactory;
