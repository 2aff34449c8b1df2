/// What the transport hands back once an exchange completes, whatever the status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponseRecord {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponseRecord {
    pub fn is_success_200(&self) -> bool {
        self.status == 200
    }
}
