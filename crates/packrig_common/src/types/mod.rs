pub mod page_descriptor;
