// HTTP handlers
// Thin adapters: parse the request, call the place service, shape the response

pub mod places;
