
mod test_agent;
mod test_properties;
