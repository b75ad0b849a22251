mod template_filesystem;

pub use template_filesystem::TemplateFilesystem;
