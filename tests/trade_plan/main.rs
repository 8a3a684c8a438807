mod allocation;
mod analytics;
mod import;
mod support;
