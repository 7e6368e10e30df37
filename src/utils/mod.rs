pub mod catalog_loader;
pub mod city_links;
