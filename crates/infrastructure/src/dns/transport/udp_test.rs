use super::*;

const UPSTREAM: &str = "127.0.0.1:5300";

fn upstream() -> SocketAddr {
    UPSTREAM.parse().unwrap()
}

/// Answers every query once with the query's ID followed by `body`.
async fn spawn_responder(body: Vec<u8>) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        if let Ok((len, peer)) = socket.recv_from(&mut buf).await {
            let mut reply = buf[..len.min(2)].to_vec();
            reply.extend_from_slice(&body);
            let _ = socket.send_to(&reply, peer).await;
        }
    });
    addr
}

#[test]
fn test_transport_reports_configured_upstream() {
    let transport = UdpTransport::new("udp://resolver.lan:5353".parse().unwrap());
    assert_eq!(transport.upstream().to_string(), "resolver.lan:5353");
    assert_eq!(transport.protocol_name(), "UDP");
}

#[test]
fn test_mismatch_error_names_upstream_and_both_ids() {
    let query = [0x00, 0x2A, 0x01, 0x00];
    let reply = [0x00, 0x2B, 0x81, 0x80];

    match validate_response_id(&query, &reply, upstream()) {
        Err(DomainError::UpstreamUnavailable { server, reason }) => {
            assert_eq!(server, UPSTREAM);
            assert!(reason.contains("0x002a"), "{}", reason);
            assert!(reason.contains("0x002b"), "{}", reason);
        }
        other => panic!("expected UpstreamUnavailable, got {:?}", other),
    }
}

#[test]
fn test_matching_id_ignores_flags_and_rcode() {
    // TC set, NXDOMAIN: still the upstream's answer to this query
    let query = [0x9C, 0x01, 0x01, 0x00];
    let reply = [0x9C, 0x01, 0x82, 0x83];
    assert!(validate_response_id(&query, &reply, upstream()).is_ok());
}

#[test]
fn test_single_byte_reply_is_rejected() {
    let query = [0x9C, 0x01, 0x01, 0x00];
    let result = validate_response_id(&query, &[0x9C], upstream());
    assert!(matches!(
        result,
        Err(DomainError::UpstreamUnavailable { ref server, .. }) if server == UPSTREAM
    ));
}

#[tokio::test]
async fn test_truncated_reply_is_relayed_unmodified() {
    let body = vec![0x82, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let addr = spawn_responder(body.clone()).await;
    let transport = UdpTransport::new(UpstreamAddr::Resolved(addr));

    let query = [0x51, 0x7E, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
    let response = transport
        .send(&query, Duration::from_secs(1))
        .await
        .unwrap();

    let mut expected = vec![0x51, 0x7E];
    expected.extend_from_slice(&body);
    assert_eq!(response.bytes, expected);
    assert_eq!(response.protocol_used, "UDP");
}
