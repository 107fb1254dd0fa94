use crate::dns::record_map::RecordTypeMapper;
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use sundial_dns_application::use_cases::HandleDnsQueryUseCase;
use sundial_dns_domain::{DnsReply, DnsRequest, Question, RecordData, ReplyRecord};
use tracing::{debug, error, info, warn};

/// hickory-server entry point.
///
/// Decodes the request into a domain `DnsRequest`, runs the dispatcher and
/// writes the synthesized reply back through the response handle. The
/// dispatcher's contract ends at producing the reply; a send failure is
/// logged here and never retried.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let client_addr = request.src();

        // A message without a usable question section still gets a reply:
        // the dispatcher turns the missing question into FORMERR.
        let dns_request = match request.request_info() {
            Ok(request_info) => {
                let query = &request_info.query;
                info!(
                    name = %query.name(),
                    record_type = %query.query_type(),
                    client = %client_addr,
                    protocol = ?request.protocol(),
                    "DNS query received"
                );
                DnsRequest::new(
                    Question::new(
                        query.original().name().to_utf8(),
                        RecordTypeMapper::from_wire(query.query_type()),
                    ),
                    client_addr,
                )
            }
            Err(e) => {
                debug!(client = %client_addr, error = %e, "Request without question section");
                DnsRequest::without_question(client_addr)
            }
        };

        let reply = self.use_case.execute(&dns_request);
        send_reply(request, &mut response_handle, &reply).await
    }
}

async fn send_reply<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    reply: &DnsReply,
) -> ResponseInfo {
    let answers = to_wire_records(reply.answers.iter());

    // SOA fallback records ride in the SOA slot of the authority section;
    // any other authority record goes in the name-server slot.
    let (soa_authority, ns_authority): (Vec<&_>, Vec<&_>) = reply
        .authority
        .iter()
        .partition(|record| matches!(record.data, RecordData::Soa { .. }));
    let soa_records = to_wire_records(soa_authority);
    let ns_records = to_wire_records(ns_authority);

    let mut header = *request.header();
    header.set_response_code(RecordTypeMapper::to_wire_response_code(reply.response_code));
    header.set_authoritative(reply.authoritative);
    header.set_recursion_available(false);

    debug!(
        code = ?reply.response_code,
        answers = answers.len(),
        authority = soa_records.len() + ns_records.len(),
        "Sending response"
    );

    let builder = MessageResponseBuilder::from_message_request(request);
    let additionals: Vec<Record> = Vec::new();
    let response = builder.build(
        header,
        answers.iter(),
        ns_records.iter(),
        soa_records.iter(),
        additionals.iter(),
    );

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            ResponseInfo::from(*request.header())
        }
    }
}

fn to_wire_records<'a>(records: impl IntoIterator<Item = &'a ReplyRecord>) -> Vec<Record> {
    records
        .into_iter()
        .filter_map(|record| {
            let wire = RecordTypeMapper::to_wire_record(record);
            if wire.is_none() {
                warn!(name = %record.name, "Dropping record with unencodable name");
            }
            wire
        })
        .collect()
}
