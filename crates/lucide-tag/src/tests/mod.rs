mod config;
mod markup;
