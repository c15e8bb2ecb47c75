/// `docker run` for an image. `ports` are `number/protocol` pairs published on the
/// same host port number.
pub fn run_image_command(full_tag: &str, ports: &[String], interactive: bool) -> String {
    let mut options = vec![
        "--rm".to_string(),
        if interactive { "-it" } else { "-d" }.to_string(),
    ];

    options.extend(ports.iter().map(|port| {
        let host_port = port.split('/').next().unwrap_or(port);
        format!("-p {}:{}", host_port, port)
    }));

    format!("docker run {} {}", options.join(" "), full_tag)
}

pub fn exec_shell_command(container_id: &str, shell: &str) -> String {
    format!("docker exec -it {} {}", container_id, shell)
}

pub fn follow_logs_command(container_id: &str) -> String {
    format!("docker logs -f {}", container_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_detached_run_without_ports_when_built_then_only_base_options() {
        assert_eq!(
            run_image_command("foo:latest", &[], false),
            "docker run --rm -d foo:latest"
        );
    }

    #[test]
    fn given_interactive_run_with_ports_when_built_then_each_port_is_published() {
        let ports = vec!["8080/tcp".to_string(), "53/udp".to_string()];

        assert_eq!(
            run_image_command("registry.io/app:1", &ports, true),
            "docker run --rm -it -p 8080:8080/tcp -p 53:53/udp registry.io/app:1"
        );
    }

    #[test]
    fn given_container_when_exec_and_logs_built_then_strings_match() {
        assert_eq!(
            exec_shell_command("c0ffee", "/bin/sh"),
            "docker exec -it c0ffee /bin/sh"
        );
        assert_eq!(follow_logs_command("c0ffee"), "docker logs -f c0ffee");
    }
}
